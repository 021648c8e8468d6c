//! Mock user input for testing

use std::collections::VecDeque;
use std::sync::Mutex;

use super::input::{Result, UserInput};

/// Mock input that replays predetermined lines and selections
///
/// Once the script runs out, input reports end-of-input.
#[derive(Debug, Default)]
pub struct MockInput {
    lines: Mutex<VecDeque<String>>,
    selections: Mutex<VecDeque<Option<usize>>>,
    prompts: Mutex<Vec<(String, String)>>,
}

impl MockInput {
    /// Create a mock that answers line prompts with `lines`, in order
    #[must_use]
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: Mutex::new(lines.iter().map(ToString::to_string).collect()),
            ..Self::default()
        }
    }

    /// Queue answers for select prompts (`None` simulates ESC)
    #[must_use]
    pub fn with_selections(self, selections: &[Option<usize>]) -> Self {
        self.selections.lock().unwrap().extend(selections.iter().copied());
        self
    }

    /// Every `(prompt, initial)` pair shown so far
    #[must_use]
    pub fn prompts(&self) -> Vec<(String, String)> {
        self.prompts.lock().unwrap().clone()
    }
}

impl UserInput for MockInput {
    fn read_line(&self, prompt: &str, initial: &str) -> Result<Option<String>> {
        self.prompts
            .lock()
            .unwrap()
            .push((prompt.to_string(), initial.to_string()));
        Ok(self.lines.lock().unwrap().pop_front())
    }

    fn select(&self, _prompt: &str, _items: &[String]) -> Result<Option<usize>> {
        Ok(self.selections.lock().unwrap().pop_front().flatten())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_input_replays_lines() {
        let input = MockInput::new(&["a", ":q"]);
        assert_eq!(input.read_line("p1", "x").unwrap(), Some("a".to_string()));
        assert_eq!(input.read_line("p2", "").unwrap(), Some(":q".to_string()));
        assert_eq!(input.read_line("p3", "").unwrap(), None);
        assert_eq!(input.prompts().len(), 3);
        assert_eq!(input.prompts()[0], ("p1".to_string(), "x".to_string()));
    }

    #[test]
    fn test_mock_input_selections() {
        let input = MockInput::default().with_selections(&[Some(1), None]);
        let items = vec!["1 - a".to_string(), "2 - b".to_string()];
        assert_eq!(input.select("pick", &items).unwrap(), Some(1));
        assert_eq!(input.select("pick", &items).unwrap(), None);
        assert_eq!(input.select("pick", &items).unwrap(), None);
    }
}
