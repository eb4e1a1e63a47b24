use super::*;

#[derive(Default)]
struct Calls(Vec<&'static str>);

impl ThemeController for Calls {
    fn enable(&mut self) -> Result<(), ToggleError> {
        self.0.push("enable");
        Ok(())
    }

    fn disable(&mut self) -> Result<(), ToggleError> {
        self.0.push("disable");
        Ok(())
    }

    fn auto(&mut self) -> Result<(), ToggleError> {
        self.0.push("auto");
        Err(ToggleError::Theme("DarkReader is not defined".to_owned()))
    }

    fn is_enabled(&self) -> Result<bool, ToggleError> {
        Ok(false)
    }
}

#[test]
fn preference_maps_to_call() {
    assert_eq!(ThemeCall::for_preference(Preference::Dark), ThemeCall::Enable);
    assert_eq!(ThemeCall::for_preference(Preference::Light), ThemeCall::Disable);
    assert_eq!(ThemeCall::for_preference(Preference::Unset), ThemeCall::Auto);
}

#[test]
fn apply_dispatches_to_matching_method() {
    let mut calls = Calls::default();
    assert!(ThemeCall::Enable.apply(&mut calls).is_ok());
    assert!(ThemeCall::Disable.apply(&mut calls).is_ok());
    assert_eq!(calls.0, vec!["enable", "disable"]);
}

#[test]
fn apply_propagates_engine_error() {
    let mut calls = Calls::default();
    let result = ThemeCall::Auto.apply(&mut calls);
    assert!(matches!(result, Err(ToggleError::Theme(ref msg)) if msg.contains("not defined")));
    assert_eq!(calls.0, vec!["auto"]);
}
