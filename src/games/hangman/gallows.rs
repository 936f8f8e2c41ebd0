/// Incremental failure drawing, one element per wrong guess.
pub trait Illustration: Send {
    fn clear(&mut self);
    fn add_part(&mut self);
    fn parts(&self) -> usize;
}

const BODY_PARTS: [&str; 6] = ["head", "body", "left-arm", "right-arm", "left-leg", "right-leg"];

/// ASCII gallows for the terminal.
#[derive(Debug, Clone, Default)]
pub struct Gallows {
    parts: usize,
}

impl Gallows {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the most recently added part, if any.
    pub fn last_part(&self) -> Option<&'static str> {
        self.parts.checked_sub(1).map(|i| BODY_PARTS[i])
    }

    pub fn lines(&self) -> Vec<String> {
        let p = self.parts;
        let head = if p >= 1 { "O" } else { " " };
        let left_arm = if p >= 3 { "/" } else { " " };
        let body = if p >= 2 { "|" } else { " " };
        let right_arm = if p >= 4 { "\\" } else { " " };
        let left_leg = if p >= 5 { "/" } else { " " };
        let right_leg = if p >= 6 { "\\" } else { " " };

        vec![
            "  +---+".to_string(),
            "  |   |".to_string(),
            format!("  {}   |", head),
            format!(" {}{}{}  |", left_arm, body, right_arm),
            format!(" {} {}  |", left_leg, right_leg),
            "      |".to_string(),
            "=========".to_string(),
        ]
    }
}

impl Illustration for Gallows {
    fn clear(&mut self) {
        self.parts = 0;
    }

    fn add_part(&mut self) {
        if self.parts < BODY_PARTS.len() {
            self.parts += 1;
        }
    }

    fn parts(&self) -> usize {
        self.parts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts_capped_at_six() {
        let mut g = Gallows::new();
        for _ in 0..10 {
            g.add_part();
        }
        assert_eq!(g.parts(), 6);
        assert_eq!(g.last_part(), Some("right-leg"));
    }

    #[test]
    fn test_clear_resets_drawing() {
        let mut g = Gallows::new();
        g.add_part();
        g.add_part();
        g.clear();
        assert_eq!(g.parts(), 0);
        assert_eq!(g.last_part(), None);
        assert_eq!(g.lines(), Gallows::new().lines());
    }

    #[test]
    fn test_head_drawn_first() {
        let mut g = Gallows::new();
        g.add_part();
        assert_eq!(g.lines()[2], "  O   |");
        assert_eq!(g.lines()[3], "      |");
    }
}
