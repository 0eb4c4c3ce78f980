// Components module - UI building blocks
//
// - Logs panel: the rotating log content (scrollable, interactive)
// - Side panel: static text areas
// - Action buttons: static button row under the logs
// - Status bar: tick counter, sink fill, rotation state
//
// Each component is a focused, single-responsibility module.

pub mod action_buttons;
pub mod logs_panel;
pub mod scrollbar;
pub mod side_panel;
pub mod status_bar;
