use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::capture::CaptureFlow;
use crate::core::form::ReportForm;
use crate::core::submit::SubmitLogic;
use crate::db::open_store;
use crate::errors::{AppError, AppResult};
use crate::models::image::ImagePayload;
use crate::ocr::{OcrStage, OcrUpdate, TesseractOcr};
use crate::ui::messages::{error, info, progress, progress_done, success, warning};
use crate::utils::date;
use crate::utils::path::expand_tilde;

use std::io::{self, Write};
use std::sync::mpsc;
use std::thread;

/// Capture a receipt: OCR the image, let the operator confirm the
/// extracted figures, then persist the report.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Capture {
        image,
        yes,
        notes,
        date: date_arg,
        time: time_arg,
        ocr,
        langs,
    } = cmd
    {
        //
        // 1. Load the image; a readable file that is not an image is
        //    silently ignored.
        //
        let path = expand_tilde(image);
        let payload = ImagePayload::from_path(&path)?;

        let mut flow = CaptureFlow::new(cfg.order());

        if !flow.select_image(payload) {
            warning(format!(
                "'{}' does not look like an image — nothing captured.",
                path.display()
            ));
            return Ok(());
        }

        //
        // 2. Recognize, rendering progress from the engine's update stream.
        //    Updates always arrive before the result, so the printer thread
        //    drains the channel while the engine runs and ends with it.
        //
        let binary = ocr.clone().unwrap_or_else(|| cfg.ocr_binary.clone());
        let languages = langs.clone().unwrap_or_else(|| cfg.ocr_languages.clone());
        let engine = TesseractOcr::new(&binary, &languages);

        info(format!("Recognizing ({languages})…"));

        let (tx, rx) = mpsc::channel::<OcrUpdate>();
        let printer = thread::spawn(move || {
            for update in rx {
                // only the recognizing stage is visible progress
                if update.stage == OcrStage::RecognizingText {
                    progress("Recognizing text", update.percent());
                }
            }
        });

        let recognized = flow.recognize(&engine, &tx);
        drop(tx);
        printer.join().ok();
        progress_done();

        let figures = match recognized {
            Ok(f) => f,
            Err(e) => {
                // flow already reset itself to idle
                error(format!("{e}. Please try again with another image."));
                return Err(e);
            }
        };

        //
        // 3. Pre-fill the form and let the operator correct it.
        //
        let mut form = ReportForm::from_figures(&figures);

        if let Some(d) = date_arg {
            form.date =
                date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?;
        }
        if let Some(t) = time_arg {
            form.time =
                date::parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))?;
        }
        if let Some(n) = notes {
            form.notes = n.clone();
        }

        if !*yes {
            edit_form(&mut form)?;
        }

        //
        // 4. Submit. On failure the entered values stay on screen so the
        //    operator can retry by hand.
        //
        let mut pool = open_store(&cfg.database)?;

        match SubmitLogic::apply(&mut pool, form.clone(), flow.take_image(), "capture") {
            Ok(id) => {
                success(format!("Report #{id} saved for {}.", form.date));
            }
            Err(e) => {
                error(format!("Failed to save the report: {e}"));
                print_form(&form);
                info("Values kept above — fix the problem and re-run.");
                return Err(e);
            }
        }
    }

    Ok(())
}

/// Interactive correction pass: show each field's default and accept an
/// override. Empty input keeps the default; unparseable numbers become 0
/// at submit time, never an error.
fn edit_form(form: &mut ReportForm) -> AppResult<()> {
    println!("\nExtracted values — press Enter to keep, or type a correction:");

    form.supply_cards = prompt_field("Supply cards", &form.supply_cards)?;
    form.supply_amount = prompt_field("Supply amount", &form.supply_amount)?;
    form.supply_total = prompt_field("Supply total", &form.supply_total)?;
    form.exchange_cards = prompt_field("Exchange cards", &form.exchange_cards)?;
    form.exchange_amount = prompt_field("Exchange amount", &form.exchange_amount)?;

    let notes = prompt_field("Notes", &form.notes)?;
    form.notes = notes;

    Ok(())
}

fn prompt_field(label: &str, default: &str) -> AppResult<String> {
    print!("  {} [{}]: ", label, default);
    io::stdout().flush().ok();

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    let trimmed = line.trim();
    if trimmed.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

fn print_form(form: &ReportForm) {
    println!("  date:            {}", form.date);
    println!("  time:            {}", form.time.format("%H:%M"));
    println!("  supply cards:    {}", form.supply_cards);
    println!("  supply amount:   {}", form.supply_amount);
    println!("  supply total:    {}", form.supply_total);
    println!("  exchange cards:  {}", form.exchange_cards);
    println!("  exchange amount: {}", form.exchange_amount);
    println!("  notes:           {}", form.notes);
}
