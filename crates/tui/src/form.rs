//! Form state and validation at the presentation boundary.
//!
//! Raw input text is parsed here; the store only ever receives a valid
//! [`Item`] or an in-range index.

use thiserror::Error;

use stockroom_core::ItemId;
use stockroom_inventory::Item;

/// Rejections shown to the user as notices. No store call is made.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Item name and stock are required")]
    MissingFields,

    #[error("Invalid stock value")]
    InvalidStock,

    #[error("Please enter item ID to delete.")]
    MissingItemId,

    #[error("Invalid item ID")]
    InvalidItemId,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Field {
    Name,
    Stock,
    ItemId,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Item Name: ",
            Field::Stock => "Stock: ",
            Field::ItemId => "Item ID: ",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Button {
    Add,
    Delete,
    Exit,
}

impl Button {
    pub fn label(self) -> &'static str {
        match self {
            Button::Add => "Add Item",
            Button::Delete => "Delete Item",
            Button::Exit => "Exit",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    Button(Button),
}

/// Tab order of the form.
pub const FOCUS_ORDER: [Focus; 6] = [
    Focus::Field(Field::Name),
    Focus::Field(Field::Stock),
    Focus::Field(Field::ItemId),
    Focus::Button(Button::Add),
    Focus::Button(Button::Delete),
    Focus::Button(Button::Exit),
];

pub const FIELDS: [Field; 3] = [Field::Name, Field::Stock, Field::ItemId];
pub const BUTTONS: [Button; 3] = [Button::Add, Button::Delete, Button::Exit];

/// Text inputs plus the focused element.
#[derive(Debug, Clone)]
pub struct InventoryForm {
    name: String,
    stock: String,
    item_id: String,
    focus: Focus,
}

impl Default for InventoryForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            stock: String::new(),
            item_id: String::new(),
            focus: FOCUS_ORDER[0],
        }
    }
}

impl InventoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Stock => &self.stock,
            Field::ItemId => &self.item_id,
        }
    }

    fn text_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Stock => &mut self.stock,
            Field::ItemId => &mut self.item_id,
        }
    }

    pub fn set_text(&mut self, field: Field, text: impl Into<String>) {
        *self.text_mut(field) = text.into();
    }

    pub fn focus_next(&mut self) {
        let pos = self.focus_position();
        self.focus = FOCUS_ORDER[(pos + 1) % FOCUS_ORDER.len()];
    }

    pub fn focus_prev(&mut self) {
        let pos = self.focus_position();
        self.focus = FOCUS_ORDER[(pos + FOCUS_ORDER.len() - 1) % FOCUS_ORDER.len()];
    }

    fn focus_position(&self) -> usize {
        FOCUS_ORDER
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0)
    }

    /// Type into the focused input. Ignored when a button has focus.
    pub fn insert_char(&mut self, c: char) {
        if let Focus::Field(field) = self.focus {
            self.text_mut(field).push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Focus::Field(field) = self.focus {
            self.text_mut(field).pop();
        }
    }

    /// Validate the name and stock inputs into an item.
    pub fn new_item(&self) -> Result<Item, FormError> {
        parse_new_item(&self.name, &self.stock)
    }

    /// Validate the item id input against the current listing length.
    pub fn item_id(&self, len: usize) -> Result<ItemId, FormError> {
        parse_item_id(&self.item_id, len)
    }

    pub fn clear_new_item(&mut self) {
        self.name.clear();
        self.stock.clear();
    }

    pub fn clear_item_id(&mut self) {
        self.item_id.clear();
    }
}

pub fn parse_new_item(name: &str, stock: &str) -> Result<Item, FormError> {
    if name.is_empty() || stock.is_empty() {
        return Err(FormError::MissingFields);
    }
    let stock: i64 = stock.parse().map_err(|_| FormError::InvalidStock)?;
    Item::new(name, stock).map_err(|_| FormError::MissingFields)
}

pub fn parse_item_id(text: &str, len: usize) -> Result<ItemId, FormError> {
    if text.is_empty() {
        return Err(FormError::MissingItemId);
    }
    text.parse::<ItemId>()
        .and_then(|id| id.checked(len))
        .map_err(|_| FormError::InvalidItemId)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_new_item_accepts_signed_integers() {
        let item = parse_new_item("Bolt", "10").unwrap();
        assert_eq!((item.name(), item.stock()), ("Bolt", 10));

        assert_eq!(parse_new_item("Nut", "-3").unwrap().stock(), -3);
        assert_eq!(parse_new_item("Nut", "0").unwrap().stock(), 0);
    }

    #[test]
    fn parse_new_item_rejects_non_integer_stock() {
        for stock in ["abc", "1.5", " 10", "10 ", "99999999999999999999"] {
            assert_eq!(parse_new_item("Bolt", stock), Err(FormError::InvalidStock), "{stock:?}");
        }
    }

    #[test]
    fn parse_new_item_requires_both_fields() {
        assert_eq!(parse_new_item("", "10"), Err(FormError::MissingFields));
        assert_eq!(parse_new_item("Bolt", ""), Err(FormError::MissingFields));
    }

    #[test]
    fn parse_item_id_validates_range() {
        assert_eq!(parse_item_id("", 3), Err(FormError::MissingItemId));
        assert_eq!(parse_item_id("x", 3), Err(FormError::InvalidItemId));
        assert_eq!(parse_item_id("0", 3), Err(FormError::InvalidItemId));
        assert_eq!(parse_item_id("-1", 3), Err(FormError::InvalidItemId));
        assert_eq!(parse_item_id("4", 3), Err(FormError::InvalidItemId));
        assert_eq!(parse_item_id("1", 0), Err(FormError::InvalidItemId));
        assert_eq!(parse_item_id("3", 3).unwrap().index(), 2);
    }

    #[test]
    fn focus_cycles_in_both_directions() {
        let mut form = InventoryForm::new();
        assert_eq!(form.focus(), Focus::Field(Field::Name));

        form.focus_prev();
        assert_eq!(form.focus(), Focus::Button(Button::Exit));

        form.focus_next();
        form.focus_next();
        assert_eq!(form.focus(), Focus::Field(Field::Stock));

        for _ in 0..FOCUS_ORDER.len() {
            form.focus_next();
        }
        assert_eq!(form.focus(), Focus::Field(Field::Stock));
    }

    #[test]
    fn typing_edits_only_the_focused_field() {
        let mut form = InventoryForm::new();
        form.insert_char('B');
        form.insert_char('x');
        form.backspace();
        form.focus_next();
        form.insert_char('7');

        assert_eq!(form.text(Field::Name), "B");
        assert_eq!(form.text(Field::Stock), "7");
        assert_eq!(form.text(Field::ItemId), "");

        // Buttons swallow typing.
        form.focus_next();
        form.focus_next();
        form.insert_char('z');
        form.backspace();
        assert_eq!(form.text(Field::ItemId), "");
        assert_eq!(form.text(Field::Stock), "7");
    }

    #[test]
    fn clearing_is_scoped_to_the_action() {
        let mut form = InventoryForm::new();
        form.set_text(Field::Name, "Bolt");
        form.set_text(Field::Stock, "10");
        form.set_text(Field::ItemId, "2");

        form.clear_new_item();
        assert_eq!(form.text(Field::Name), "");
        assert_eq!(form.text(Field::Stock), "");
        assert_eq!(form.text(Field::ItemId), "2");

        form.clear_item_id();
        assert_eq!(form.text(Field::ItemId), "");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: any decimal i64 is accepted as stock verbatim.
        #[test]
        fn any_i64_is_valid_stock(stock in any::<i64>()) {
            let item = parse_new_item("Bolt", &stock.to_string()).unwrap();
            prop_assert_eq!(item.stock(), stock);
        }

        /// Property: ids in [1, len] map to index id-1; everything else is rejected.
        #[test]
        fn item_id_range(id in -50i64..50, len in 0usize..30) {
            let result = parse_item_id(&id.to_string(), len);
            if id >= 1 && (id as usize) <= len {
                prop_assert_eq!(result.unwrap().index(), id as usize - 1);
            } else {
                prop_assert_eq!(result, Err(FormError::InvalidItemId));
            }
        }
    }
}
