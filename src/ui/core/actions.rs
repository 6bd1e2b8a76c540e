/// Every user intent and delayed effect in the application.
///
/// Components translate raw key/mouse events into actions; the application
/// component applies them to the [`crate::directory::Directory`] state
/// machine. Keeping the transition table behind actions keeps it pure and
/// independently testable from the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Filter operations
    SetSearchText(String),
    SubmitSearch,
    SelectDistrict(String),
    /// Empty id means "show all groups in the current district"
    SelectGroup(String),
    ShowMap(String),
    /// Delayed bring-into-view of the map panel after [`Action::ShowMap`]
    FocusMap,
    CloseMap,

    // Results navigation
    NextGroup,
    PreviousGroup,

    // Notification banner
    CloseNotification,
    /// Delayed auto-dismiss; carries the id of the notification it was
    /// scheduled for
    ExpireNotification(u64),

    // Navigation overlay
    OpenMenu,
    CloseMenu,
    Navigate(String),

    // UI operations
    ShowLogs(bool),

    // App control
    Quit,
    None,
}
