use ratatui::layout::Rect;

/// Height of the readout panel: two text lines plus borders.
pub const DISPLAY_HEIGHT: u16 = 4;
pub const FOOTER_HEIGHT: u16 = 3;

/// Split the screen into (display, keypad, footer).
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let display_height = area.height.min(DISPLAY_HEIGHT);
    let footer_height = FOOTER_HEIGHT.min(area.height.saturating_sub(display_height));
    let display = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: display_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let keypad = Rect {
        x: area.x,
        y: area.y + display_height,
        width: area.width,
        height: area.height.saturating_sub(display_height + footer_height),
    };
    (display, keypad, footer)
}

pub fn keypad_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_stack_without_overlap() {
        let (display, keypad, footer) = layout_regions(Rect::new(0, 0, 40, 30));
        assert_eq!(display, Rect::new(0, 0, 40, 4));
        assert_eq!(keypad, Rect::new(0, 4, 40, 23));
        assert_eq!(footer, Rect::new(0, 27, 40, 3));
    }

    #[test]
    fn tiny_terminal_gives_empty_keypad() {
        let (display, keypad, footer) = layout_regions(Rect::new(0, 0, 20, 5));
        assert_eq!(display.height, 4);
        assert_eq!(footer.height, 1);
        assert_eq!(keypad.height, 0);
    }
}
