use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::form::ReportForm;
use crate::core::submit::SubmitLogic;
use crate::db::open_store;
use crate::errors::{AppError, AppResult};
use crate::models::image::ImagePayload;
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::path::expand_tilde;

/// Add a report manually, no OCR involved. Numeric arguments follow the
/// form semantics: whatever fails to parse is stored as 0.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date: date_arg,
        time: time_arg,
        supply_cards,
        supply_amount,
        supply_total,
        exchange_cards,
        exchange_amount,
        notes,
        image,
    } = cmd
    {
        //
        // 1. Build the form from the arguments
        //
        let mut form = ReportForm::blank();

        if let Some(d) = date_arg {
            form.date =
                date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?;
        }
        if let Some(t) = time_arg {
            form.time =
                date::parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))?;
        }

        form.supply_cards = supply_cards.clone();
        form.supply_amount = supply_amount.clone();
        form.supply_total = supply_total.clone();
        form.exchange_cards = exchange_cards.clone();
        form.exchange_amount = exchange_amount.clone();
        form.notes = notes.clone().unwrap_or_default();

        //
        // 2. Optional image attachment. An explicit --image that is not an
        //    image is a mistake worth telling the user about.
        //
        let payload = match image {
            Some(p) => {
                let path = expand_tilde(p);
                match ImagePayload::from_path(&path)? {
                    Some(img) => Some(img),
                    None => {
                        warning(format!("'{}' is not an image, skipping attachment.", p));
                        None
                    }
                }
            }
            None => None,
        };

        //
        // 3. Persist
        //
        let mut pool = open_store(&cfg.database)?;

        let id = SubmitLogic::apply(&mut pool, form.clone(), payload, "add")?;

        success(format!("Report #{id} saved for {}.", form.date));
    }

    Ok(())
}
