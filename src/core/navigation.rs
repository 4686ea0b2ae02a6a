//! Zurück/Vor-Verlauf über Kartenpositionen (Browser-Semantik).

use super::WorldCoordinate;

/// Positionsverlauf eines Tabs.
///
/// `back` enthält die zuletzt besuchte Position am Ende, `forward` die zuletzt
/// rückgängig gemachte Position am Ende. Die aktuelle Position wird separat
/// gehalten und liegt nie auf einem der beiden Stacks.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationHistory {
    current: WorldCoordinate,
    back: Vec<WorldCoordinate>,
    forward: Vec<WorldCoordinate>,
}

impl NavigationHistory {
    /// Erstellt einen leeren Verlauf mit Startposition.
    pub fn new(current: WorldCoordinate) -> Self {
        Self {
            current,
            back: Vec::new(),
            forward: Vec::new(),
        }
    }

    /// Aktuelle Position
    pub fn current(&self) -> WorldCoordinate {
        self.current
    }

    /// Zurück-Stack (älteste Position zuerst).
    pub fn back_entries(&self) -> &[WorldCoordinate] {
        &self.back
    }

    /// Vor-Stack (zuletzt rückgängig gemachte Position am Ende).
    pub fn forward_entries(&self) -> &[WorldCoordinate] {
        &self.forward
    }

    /// Prüft ob ein Zurück-Schritt möglich ist.
    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    /// Prüft ob ein Vor-Schritt möglich ist.
    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    /// Springt zu einer neuen Position.
    ///
    /// Die bisherige Position wandert auf den Zurück-Stack, der Vor-Stack
    /// wird verworfen.
    pub fn navigate_to(&mut self, target: WorldCoordinate) {
        self.back.push(self.current);
        self.current = target;
        self.forward.clear();
    }

    /// Geht einen Schritt zurück. Gibt `false` zurück, wenn nichts zu tun war.
    pub fn back(&mut self) -> bool {
        let Some(prev) = self.back.pop() else {
            return false;
        };
        self.forward.push(self.current);
        self.current = prev;
        true
    }

    /// Geht einen Schritt vor. Gibt `false` zurück, wenn nichts zu tun war.
    pub fn forward(&mut self) -> bool {
        let Some(next) = self.forward.pop() else {
            return false;
        };
        self.back.push(self.current);
        self.current = next;
        true
    }

    /// Liefert bis zu `limit` Einträge des Zurück-Stacks, jüngster zuerst.
    ///
    /// Der Iterator ist `Clone` und kann damit beliebig oft neu gestartet
    /// werden, ohne den Verlauf zu verändern.
    pub fn export_tail(
        &self,
        limit: usize,
    ) -> impl Iterator<Item = WorldCoordinate> + Clone + '_ {
        self.back.iter().rev().take(limit).copied()
    }

    /// Ersetzt den kompletten Verlauf.
    ///
    /// `entries` ist wie bei [`export_tail`](Self::export_tail) jüngster
    /// Eintrag zuerst. Der Vor-Stack bleibt leer.
    pub fn replace_history<I>(&mut self, entries: I, current: WorldCoordinate)
    where
        I: IntoIterator<Item = WorldCoordinate>,
    {
        let mut back: Vec<WorldCoordinate> = entries.into_iter().collect();
        back.reverse();
        self.back = back;
        self.forward.clear();
        self.current = current;
    }
}

impl Default for NavigationHistory {
    fn default() -> Self {
        Self::new(WorldCoordinate::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(layer: u32, x: f64, y: f64) -> WorldCoordinate {
        WorldCoordinate::new(layer, x, y)
    }

    #[test]
    fn empty_history_cannot_go_back_or_forward() {
        let mut history = NavigationHistory::new(c(0, 0.0, 0.0));
        assert!(!history.can_go_back());
        assert!(!history.can_go_forward());
        assert!(!history.back());
        assert!(!history.forward());
        assert_eq!(history.current(), c(0, 0.0, 0.0));
    }

    #[test]
    fn back_and_forward_round_trip() {
        let mut history = NavigationHistory::new(c(0, 0.0, 0.0));

        history.navigate_to(c(1, 5.0, 5.0));
        assert_eq!(history.current(), c(1, 5.0, 5.0));
        assert_eq!(history.back_entries(), &[c(0, 0.0, 0.0)]);
        assert!(history.forward_entries().is_empty());

        assert!(history.back());
        assert_eq!(history.current(), c(0, 0.0, 0.0));
        assert!(history.back_entries().is_empty());
        assert_eq!(history.forward_entries(), &[c(1, 5.0, 5.0)]);

        assert!(history.forward());
        assert_eq!(history.current(), c(1, 5.0, 5.0));
        assert_eq!(history.back_entries(), &[c(0, 0.0, 0.0)]);
        assert!(history.forward_entries().is_empty());
    }

    #[test]
    fn new_navigation_clears_forward_stack() {
        let mut history = NavigationHistory::new(c(0, 0.0, 0.0));
        history.navigate_to(c(0, 1.0, 0.0));
        history.navigate_to(c(0, 2.0, 0.0));
        history.back();
        history.back();
        assert_eq!(history.forward_entries().len(), 2);

        history.navigate_to(c(2, 9.0, 9.0));
        assert!(history.forward_entries().is_empty());
        assert_eq!(history.back_entries(), &[c(0, 0.0, 0.0)]);
        assert_eq!(history.current(), c(2, 9.0, 9.0));
    }

    #[test]
    fn navigate_to_current_position_still_records_step() {
        let mut history = NavigationHistory::new(c(0, 0.0, 0.0));
        history.navigate_to(c(1, 1.0, 1.0));
        history.back();

        history.navigate_to(c(0, 0.0, 0.0));
        assert_eq!(history.back_entries(), &[c(0, 0.0, 0.0)]);
        assert!(history.forward_entries().is_empty());
    }

    #[test]
    fn export_tail_is_most_recent_first_and_capped() {
        let mut history = NavigationHistory::new(c(0, 0.0, 0.0));
        for i in 1..=5 {
            history.navigate_to(c(0, f64::from(i), 0.0));
        }

        let tail: Vec<_> = history.export_tail(3).collect();
        assert_eq!(tail, vec![c(0, 4.0, 0.0), c(0, 3.0, 0.0), c(0, 2.0, 0.0)]);
        assert_eq!(history.back_entries().len(), 5);
    }

    #[test]
    fn export_tail_is_restartable() {
        let mut history = NavigationHistory::new(c(0, 0.0, 0.0));
        history.navigate_to(c(1, 1.0, 1.0));
        history.navigate_to(c(2, 2.0, 2.0));

        let tail = history.export_tail(10);
        let first: Vec<_> = tail.clone().collect();
        let second: Vec<_> = tail.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn export_tail_with_zero_limit_is_empty() {
        let mut history = NavigationHistory::new(c(0, 0.0, 0.0));
        history.navigate_to(c(1, 1.0, 1.0));
        assert_eq!(history.export_tail(0).count(), 0);
    }

    #[test]
    fn replace_history_uses_export_order() {
        let mut history = NavigationHistory::new(c(0, 0.0, 0.0));
        history.navigate_to(c(9, 9.0, 9.0));
        history.back();

        history.replace_history(vec![c(2, 2.0, 2.0), c(1, 1.0, 1.0)], c(5, 0.0, 0.0));

        assert_eq!(history.current(), c(5, 0.0, 0.0));
        assert_eq!(history.back_entries(), &[c(1, 1.0, 1.0), c(2, 2.0, 2.0)]);
        assert!(history.forward_entries().is_empty());

        assert!(history.back());
        assert_eq!(history.current(), c(2, 2.0, 2.0));
    }
}
