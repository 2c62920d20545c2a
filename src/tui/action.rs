#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Action {
    Quit,
    ToggleTheme,
    ResetColors,
    FocusNext,
    FocusPrev,
    Activate,
    None,
}
