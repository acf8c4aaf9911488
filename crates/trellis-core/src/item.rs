//! Example item validation.
//!
//! Enforces the column limits of the `example_items` table before anything
//! reaches storage.

use trellis_types::error::ItemError;
use trellis_types::item::{DESCRIPTION_MAX_LEN, NAME_MAX_LEN, NewItem};

/// Validate and normalize a new item.
///
/// The name is trimmed and must be non-empty; a blank description is
/// stored as `None`. Lengths are counted in characters, not bytes.
pub fn validate_new_item(item: NewItem) -> Result<NewItem, ItemError> {
    let name = item.name.trim().to_string();
    if name.is_empty() {
        return Err(ItemError::InvalidName("name cannot be empty".to_string()));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(ItemError::InvalidName(format!(
            "name must be at most {NAME_MAX_LEN} characters"
        )));
    }

    let description = match item.description {
        Some(d) if d.trim().is_empty() => None,
        Some(d) if d.chars().count() > DESCRIPTION_MAX_LEN => {
            return Err(ItemError::InvalidDescription(format!(
                "description must be at most {DESCRIPTION_MAX_LEN} characters"
            )));
        }
        other => other,
    };

    Ok(NewItem {
        name,
        description,
        ..item
    })
}
