use crate::domain::models::{JsonErr, JsonOut};
use serde::Serialize;

pub fn print_one<T: Serialize>(data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}

pub fn print_err(message: &str) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonErr {
            ok: false,
            error: message.to_string()
        })?
    );
    Ok(())
}
