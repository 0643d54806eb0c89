use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::rc::Rc;
use wadoru_core::{PersistedValue, Preferences, Setting};
use yew::prelude::*;

/// Reactive handle to a persisted preference.
///
/// Updates go through the shared [`PersistedValue`], so a functional update
/// always sees the latest value even when several land in one event.
pub struct SettingHandle<T> {
    cell: Rc<RefCell<PersistedValue<T>>>,
    redraw: UseForceUpdateHandle,
}

impl<T> Clone for SettingHandle<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
            redraw: self.redraw.clone(),
        }
    }
}

impl<T> SettingHandle<T>
where
    T: Serialize + DeserializeOwned + Clone + 'static,
{
    #[must_use]
    pub fn get(&self) -> T {
        self.cell.borrow().get().clone()
    }

    pub fn set(&self, value: T) {
        self.cell.borrow_mut().set(value);
        self.redraw.force_update();
    }

    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        self.cell.borrow_mut().update(f);
        self.redraw.force_update();
    }

    #[must_use]
    pub fn setter(&self) -> Callback<T> {
        let handle = self.clone();
        Callback::from(move |value: T| handle.set(value))
    }
}

impl SettingHandle<bool> {
    #[must_use]
    pub fn toggler(&self) -> Callback<()> {
        let handle = self.clone();
        Callback::from(move |()| handle.update(|v| !v))
    }
}

/// Open `setting` once for the lifetime of the component.
#[hook]
pub fn use_setting<T>(preferences: &Preferences, setting: Setting<T>) -> SettingHandle<T>
where
    T: Serialize + DeserializeOwned + Clone + 'static,
{
    let preferences = preferences.clone();
    let cell = use_mut_ref(move || preferences.open(setting));
    let redraw = use_force_update();
    SettingHandle { cell, redraw }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use wadoru_core::{MemoryStorage, SettingsStorage};
    use yew::LocalServerRenderer;

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        preferences: Preferences,
    }

    #[function_component(ToggleHarness)]
    fn toggle_harness(props: &HarnessProps) -> Html {
        let dark = use_setting(&props.preferences, Preferences::dark(false));
        let color_blind = use_setting(&props.preferences, Preferences::color_blind());
        let done = use_mut_ref(|| false);
        if !*done.borrow() {
            *done.borrow_mut() = true;
            dark.update(|v| !v);
            color_blind.toggler().emit(());
            color_blind.toggler().emit(());
        }
        html! { <div data-dark={dark.get().to_string()} data-cb={color_blind.get().to_string()} /> }
    }

    #[test]
    fn updates_apply_to_latest_value_and_persist() {
        let storage = Rc::new(MemoryStorage::new());
        let shared: Rc<dyn SettingsStorage> = storage.clone();
        let props = HarnessProps {
            preferences: Preferences::from_shared(shared),
        };
        let html = block_on(LocalServerRenderer::<ToggleHarness>::with_props(props).render());
        assert!(html.contains("data-dark=\"true\""));
        assert!(html.contains("data-cb=\"false\""));
        assert_eq!(storage.raw("dark").as_deref(), Some("true"));
        assert_eq!(storage.raw("colorblind").as_deref(), Some("false"));
    }
}
