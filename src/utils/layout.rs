use ratatui::layout::Rect;

/// A rectangle of `width` x `height` centered in `area`, clamped to fit.
pub fn center_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// `percent` of `total`, for sizing popups relative to the terminal.
pub fn percent_of(total: u16, percent: u16) -> u16 {
    u16::try_from(u32::from(total) * u32::from(percent.min(100)) / 100).unwrap_or(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_popup() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(center_popup(area, 50, 10), Rect::new(25, 15, 50, 10));
        assert_eq!(center_popup(area, 200, 80), area);
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(80, 50), 40);
        assert_eq!(percent_of(80, 150), 80);
    }
}
