use crate::get_data_location;
use crate::store::{self, StoreError};

// Wishes are plain strings kept in insertion order; display numbering is
// 1-based on top of this list.
pub type WishList = Vec<String>;

pub fn wishes_location() -> String {
    format!("{}/wishes.json", get_data_location())
}

pub fn load_wishes() -> WishList {
    store::load_or_default(&wishes_location())
}

pub fn save_wishes(wishes: &WishList) -> Result<(), StoreError> {
    store::save_blob(&wishes_location(), wishes)
}
