//! App controller: applies form actions to the inventory store.

use stockroom_inventory::{Backend, InventoryStore, Item, StoreError};

use crate::form::{Button, Focus, InventoryForm};
use crate::input::Action;

/// Most recent notices kept on screen; older ones are dropped.
pub const MAX_NOTICES: usize = 3;

/// UI state around an exclusively owned store.
///
/// Notices are inline messages rendered under the list, newest last. Every
/// successful mutation re-renders the list, which clears them.
#[derive(Debug)]
pub struct App<B> {
    store: InventoryStore<B>,
    form: InventoryForm,
    notices: Vec<String>,
    running: bool,
}

impl<B: Backend> App<B> {
    pub fn new(store: InventoryStore<B>) -> Self {
        Self {
            store,
            form: InventoryForm::new(),
            notices: Vec::new(),
            running: true,
        }
    }

    pub fn items(&self) -> &[Item] {
        self.store.items()
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    pub fn form(&self) -> &InventoryForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut InventoryForm {
        &mut self.form
    }

    pub fn store(&self) -> &InventoryStore<B> {
        &self.store
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn handle(&mut self, action: Action) {
        match action {
            Action::FocusNext => self.form.focus_next(),
            Action::FocusPrev => self.form.focus_prev(),
            Action::Insert(c) => self.form.insert_char(c),
            Action::Backspace => self.form.backspace(),
            Action::Quit => self.quit(),
            Action::Submit => match self.form.focus() {
                Focus::Field(_) => self.form.focus_next(),
                Focus::Button(button) => self.press(button),
            },
        }
    }

    pub fn press(&mut self, button: Button) {
        match button {
            Button::Add => self.add_item(),
            Button::Delete => self.delete_item(),
            Button::Exit => self.quit(),
        }
    }

    fn add_item(&mut self) {
        let item = match self.form.new_item() {
            Ok(item) => item,
            Err(err) => {
                tracing::debug!(error = %err, "add rejected");
                self.notify(err.to_string());
                return;
            }
        };

        let result = self.store.append(item);
        self.refresh();
        self.form.clear_new_item();
        if let Err(err) = result {
            self.report_store_error(&err);
        }
    }

    fn delete_item(&mut self) {
        let id = match self.form.item_id(self.store.len()) {
            Ok(id) => id,
            Err(err) => {
                tracing::debug!(error = %err, "delete rejected");
                self.notify(err.to_string());
                return;
            }
        };

        match self.store.delete_at(id.index()) {
            Ok(_) => {
                self.refresh();
                self.notify(format!("Item [{id}] deleted"));
                self.form.clear_item_id();
            }
            Err(err @ StoreError::InvalidIndex { .. }) => self.report_store_error(&err),
            Err(err) => {
                // The item is gone from memory even though the write failed.
                self.refresh();
                self.notify(format!("Item [{id}] deleted"));
                self.form.clear_item_id();
                self.report_store_error(&err);
            }
        }
    }

    fn quit(&mut self) {
        tracing::info!("exit requested");
        self.running = false;
    }

    fn refresh(&mut self) {
        self.notices.clear();
    }

    fn notify(&mut self, message: impl Into<String>) {
        self.notices.push(message.into());
        if self.notices.len() > MAX_NOTICES {
            let excess = self.notices.len() - MAX_NOTICES;
            self.notices.drain(..excess);
        }
    }

    fn report_store_error(&mut self, err: &StoreError) {
        match err {
            StoreError::InvalidIndex { .. } => self.notify("invalid index"),
            _ => {
                tracing::error!(error = %err, "failed to save inventory");
                self.notify(format!("Failed to save inventory: {err}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Field;
    use std::sync::Arc;
    use stockroom_inventory::{DecodePolicy, MemoryBackend};

    fn app_with(content: &str) -> (App<Arc<MemoryBackend>>, Arc<MemoryBackend>) {
        let backend = Arc::new(MemoryBackend::with_content(content));
        let store = InventoryStore::open(Arc::clone(&backend), DecodePolicy::Strict).unwrap();
        (App::new(store), backend)
    }

    fn item(name: &str, stock: i64) -> Item {
        Item::new(name, stock).unwrap()
    }

    fn type_text(app: &mut App<Arc<MemoryBackend>>, text: &str) {
        for c in text.chars() {
            app.handle(Action::Insert(c));
        }
    }

    #[test]
    fn add_through_keystrokes_appends_and_clears_inputs() {
        let (mut app, backend) = app_with("[]");

        type_text(&mut app, "Bolt");
        app.handle(Action::Submit);
        type_text(&mut app, "10");
        app.handle(Action::Submit);
        app.handle(Action::Submit); // item id -> Add Item
        assert_eq!(app.form().focus(), Focus::Button(Button::Add));
        app.handle(Action::Submit);

        assert_eq!(app.items(), &[item("Bolt", 10)]);
        assert_eq!(app.form().text(Field::Name), "");
        assert_eq!(app.form().text(Field::Stock), "");
        assert!(app.notices().is_empty());
        assert!(backend.content().unwrap().starts_with(b"[\n {"));
    }

    #[test]
    fn invalid_stock_never_reaches_the_store() {
        let (mut app, backend) = app_with("[]");
        app.form_mut().set_text(Field::Name, "Bolt");
        app.form_mut().set_text(Field::Stock, "abc");

        app.press(Button::Add);

        assert!(app.items().is_empty());
        assert_eq!(app.notices(), &["Invalid stock value".to_string()]);
        assert_eq!(app.form().text(Field::Stock), "abc");
        assert_eq!(backend.content().unwrap(), b"[]");
    }

    #[test]
    fn missing_fields_are_reported() {
        let (mut app, _backend) = app_with("[]");
        app.form_mut().set_text(Field::Name, "Bolt");

        app.press(Button::Add);

        assert!(app.items().is_empty());
        assert_eq!(app.notices(), &["Item name and stock are required".to_string()]);
    }

    #[test]
    fn delete_by_item_id() {
        let (mut app, backend) =
            app_with(r#"[{"name":"Bolt","stock":10},{"name":"Nut","stock":5}]"#);
        app.form_mut().set_text(Field::ItemId, "1");

        app.press(Button::Delete);

        assert_eq!(app.items(), &[item("Nut", 5)]);
        assert_eq!(app.notices(), &["Item [1] deleted".to_string()]);
        assert_eq!(app.form().text(Field::ItemId), "");
        assert!(String::from_utf8(backend.content().unwrap()).unwrap().contains("Nut"));
    }

    #[test]
    fn delete_rejects_empty_and_out_of_range_ids() {
        let (mut app, backend) = app_with(r#"[{"name":"Bolt","stock":10}]"#);

        app.press(Button::Delete);
        app.form_mut().set_text(Field::ItemId, "5");
        app.press(Button::Delete);

        assert_eq!(app.items(), &[item("Bolt", 10)]);
        assert_eq!(
            app.notices(),
            &[
                "Please enter item ID to delete.".to_string(),
                "Invalid item ID".to_string()
            ]
        );
        assert_eq!(app.form().text(Field::ItemId), "5");
        assert_eq!(backend.content().unwrap(), br#"[{"name":"Bolt","stock":10}]"#);
    }

    #[test]
    fn successful_mutation_clears_earlier_notices() {
        let (mut app, _backend) = app_with("[]");
        app.press(Button::Delete);
        assert_eq!(app.notices().len(), 1);

        app.form_mut().set_text(Field::Name, "Bolt");
        app.form_mut().set_text(Field::Stock, "1");
        app.press(Button::Add);

        assert!(app.notices().is_empty());
    }

    #[test]
    fn only_the_latest_notices_are_kept() {
        let (mut app, _backend) = app_with("[]");
        for id in ["7", "8", "9", "x"] {
            app.form_mut().set_text(Field::ItemId, id);
            app.press(Button::Delete);
        }
        app.form_mut().set_text(Field::ItemId, "");
        app.press(Button::Delete);

        assert_eq!(app.notices().len(), MAX_NOTICES);
        assert_eq!(
            app.notices().last().map(String::as_str),
            Some("Please enter item ID to delete.")
        );
    }

    #[test]
    fn write_failure_is_shown_but_item_is_listed() {
        let (mut app, backend) = app_with("[]");
        backend.set_fail_writes(true);
        app.form_mut().set_text(Field::Name, "Bolt");
        app.form_mut().set_text(Field::Stock, "10");

        app.press(Button::Add);

        assert_eq!(app.items(), &[item("Bolt", 10)]);
        assert_eq!(app.notices().len(), 1);
        assert!(app.notices()[0].starts_with("Failed to save inventory"));
        assert_eq!(backend.content().unwrap(), b"[]");
    }

    #[test]
    fn exit_button_and_quit_key_stop_the_app() {
        let (mut app, _backend) = app_with("[]");
        app.press(Button::Exit);
        assert!(!app.is_running());

        let (mut app, _backend) = app_with("[]");
        app.handle(Action::Quit);
        assert!(!app.is_running());
    }
}
