//! Column sorting for the rendered process table.
//!
//! Sorting operates on the display cells (the same text the table shows),
//! so percent columns strip their trailing "%" and unparsable cells compare
//! as 0. A plain comparator sort; stability for equal keys is not promised.

use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRow {
    pub pid: String,
    pub name: String,
    /// e.g. "12.3%"
    pub cpu: String,
    /// e.g. "4.0%"
    pub mem: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Pid,
    Name,
    Cpu,
    Mem,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    pub key: Option<SortKey>,
    pub ascending: bool,
}

/// Sorts in place and updates the toggle state. Clicking the column that is
/// already sorted flips direction; a new column starts descending. Empty or
/// single-row tables are a no-op and leave the state untouched.
pub fn sort_rows(key: SortKey, rows: &mut [ProcessRow], state: &mut SortState) {
    if rows.len() <= 1 {
        return;
    }
    let ascending = if state.key == Some(key) { !state.ascending } else { false };
    *state = SortState { key: Some(key), ascending };

    rows.sort_by(|a, b| {
        let ord = match key {
            SortKey::Pid => int_cell(&a.pid).cmp(&int_cell(&b.pid)),
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Cpu => cmp_pct(&a.cpu, &b.cpu),
            SortKey::Mem => cmp_pct(&a.mem, &b.mem),
        };
        if ascending {
            ord
        } else {
            ord.reverse()
        }
    });
}

fn int_cell(s: &str) -> i64 {
    s.trim().parse().unwrap_or(0)
}

fn pct_cell(s: &str) -> f64 {
    s.trim().trim_end_matches('%').parse().unwrap_or(0.0)
}

fn cmp_pct(a: &str, b: &str) -> Ordering {
    pct_cell(a).partial_cmp(&pct_cell(b)).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pid: &str, name: &str, cpu: &str, mem: &str) -> ProcessRow {
        ProcessRow {
            pid: pid.into(),
            name: name.into(),
            cpu: cpu.into(),
            mem: mem.into(),
        }
    }

    #[test]
    fn new_column_starts_descending_and_toggles() {
        let mut rows = vec![
            row("1", "a", "10.0%", "1.0%"),
            row("2", "b", "30.0%", "2.0%"),
            row("3", "c", "20.0%", "3.0%"),
        ];
        let mut state = SortState::default();

        sort_rows(SortKey::Cpu, &mut rows, &mut state);
        assert_eq!(state, SortState { key: Some(SortKey::Cpu), ascending: false });
        let cpus: Vec<&str> = rows.iter().map(|r| r.cpu.as_str()).collect();
        assert_eq!(cpus, ["30.0%", "20.0%", "10.0%"]);

        sort_rows(SortKey::Cpu, &mut rows, &mut state);
        assert!(state.ascending);
        let cpus: Vec<&str> = rows.iter().map(|r| r.cpu.as_str()).collect();
        assert_eq!(cpus, ["10.0%", "20.0%", "30.0%"]);

        // Switching columns resets to descending.
        sort_rows(SortKey::Mem, &mut rows, &mut state);
        assert_eq!(state, SortState { key: Some(SortKey::Mem), ascending: false });
        let mems: Vec<&str> = rows.iter().map(|r| r.mem.as_str()).collect();
        assert_eq!(mems, ["3.0%", "2.0%", "1.0%"]);
    }

    #[test]
    fn name_sort_is_case_insensitive() {
        let mut rows = vec![
            row("1", "bob", "0.0%", "0.0%"),
            row("2", "Alice", "0.0%", "0.0%"),
            row("3", "Carol", "0.0%", "0.0%"),
        ];
        let mut state = SortState { key: Some(SortKey::Name), ascending: false };
        // Same key -> toggles to ascending
        sort_rows(SortKey::Name, &mut rows, &mut state);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Alice", "bob", "Carol"]);
    }

    #[test]
    fn pid_sort_is_integer_not_lexicographic() {
        let mut rows = vec![
            row("9", "a", "0.0%", "0.0%"),
            row("100", "b", "0.0%", "0.0%"),
            row("20", "c", "0.0%", "0.0%"),
        ];
        let mut state = SortState { key: Some(SortKey::Pid), ascending: false };
        sort_rows(SortKey::Pid, &mut rows, &mut state);
        let pids: Vec<&str> = rows.iter().map(|r| r.pid.as_str()).collect();
        assert_eq!(pids, ["9", "20", "100"]);
    }

    #[test]
    fn unparsable_cells_default_to_zero() {
        let mut rows = vec![
            row("1", "a", "N/A%", "0.0%"),
            row("2", "b", "5.0%", "0.0%"),
        ];
        let mut state = SortState::default();
        sort_rows(SortKey::Cpu, &mut rows, &mut state);
        assert_eq!(rows[0].cpu, "5.0%");
    }

    #[test]
    fn empty_table_is_a_noop() {
        let mut rows: Vec<ProcessRow> = Vec::new();
        let mut state = SortState::default();
        sort_rows(SortKey::Cpu, &mut rows, &mut state);
        assert_eq!(state, SortState::default());

        let mut one = vec![row("1", "a", "1.0%", "1.0%")];
        sort_rows(SortKey::Cpu, &mut one, &mut state);
        assert_eq!(state, SortState::default());
    }
}
