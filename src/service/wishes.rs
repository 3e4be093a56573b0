use crate::models::wish::WishList;

// Wish list mutations used by the wishlist screen. The empty-text check
// matches the entry alert, which silently ignores an empty save.

pub fn add_wish(wishes: &mut WishList, text: &str) -> Result<(), String> {
    if text.is_empty() {
        return Err("A wish cannot be empty.".to_string());
    }
    wishes.push(text.to_string());
    Ok(())
}

pub fn update_wish(wishes: &mut WishList, index: usize, text: &str) -> Result<(), String> {
    if text.is_empty() {
        return Err("A wish cannot be empty.".to_string());
    }
    let Some(slot) = wishes.get_mut(index) else {
        return Err(format!("No wish at position {}", index + 1));
    };
    *slot = text.to_string();
    Ok(())
}

pub fn remove_wish(wishes: &mut WishList, index: usize) -> Result<String, String> {
    if index >= wishes.len() {
        return Err(format!("No wish at position {}", index + 1));
    }
    Ok(wishes.remove(index))
}
