use crate::error::{Result, TicklistError};

/// Items are single, non-empty lines.
pub fn validate_text(text: &str) -> Result<()> {
    if text.is_empty() {
        return Err(TicklistError::InvalidItem("Item text cannot be empty".into()));
    }
    if text.contains(['\n', '\r']) {
        return Err(TicklistError::InvalidItem(
            "Item text cannot span multiple lines".into(),
        ));
    }
    Ok(())
}
