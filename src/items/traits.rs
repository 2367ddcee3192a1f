//! Display traits shared by list items.

/// Trait for items that have basic display properties
pub trait DisplayItem {
    /// Get the display name/title for this item
    fn name(&self) -> &str;

    /// Get the description/subtitle for this item
    fn description(&self) -> Option<&str>;
}
