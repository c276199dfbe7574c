pub mod layout;
pub mod list_navigation;
pub mod path;
pub mod text_input;

pub use layout::{center_popup, percent_of};
pub use list_navigation::{ListStateExt, DEFAULT_PAGE_SIZE};
pub use path::{expand_path, get_config_dir, get_config_path, get_home_dir, get_log_dir};
pub use text_input::TextInput;

/// Flatten a rendered buffer into text, one line per row.
#[cfg(test)]
pub(crate) fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
