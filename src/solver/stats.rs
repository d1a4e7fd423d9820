use std::fmt::{self, Debug, Display, Formatter};

use separator::Separatable;

/// Counters of a single search run, split by depth (number of moves from the initial state).
///
/// What counts as generated or expanded differs between strategies:
/// - BFS counts every direction it tries as generated, including blocked ones,
///   and a node as expanded when it's first added to the visited set.
/// - All other strategies count only successful moves as generated
///   and a node as expanded when it's taken from the frontier and hasn't been visited yet
///   (IDA* has no visited set so it counts every node within the bound, in every iteration).
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    generated_states: Vec<u64>,
    expanded_states: Vec<u64>,
    duplicate_states: Vec<u64>,
}

impl Stats {
    pub fn new() -> Self {
        Stats::default()
    }

    pub fn total_generated(&self) -> u64 {
        self.generated_states.iter().sum::<u64>()
    }

    pub fn total_expanded(&self) -> u64 {
        self.expanded_states.iter().sum::<u64>()
    }

    pub fn total_duplicates(&self) -> u64 {
        self.duplicate_states.iter().sum::<u64>()
    }

    /// Returns true when this is the first state generated at `depth`.
    pub(crate) fn add_generated(&mut self, depth: usize) -> bool {
        Self::add(&mut self.generated_states, depth)
    }

    pub(crate) fn add_expanded(&mut self, depth: usize) -> bool {
        Self::add(&mut self.expanded_states, depth)
    }

    pub(crate) fn add_duplicate(&mut self, depth: usize) -> bool {
        Self::add(&mut self.duplicate_states, depth)
    }

    fn add(counts: &mut Vec<u64>, depth: usize) -> bool {
        let mut ret = false;

        // while because some depths might be skipped
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "generated by depth: {:?}", self.generated_states)?;
        writeln!(f, "expanded by depth: {:?}", self.expanded_states)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "total generated: {}", self.total_generated().separated_string())?;
        writeln!(f, "total expanded: {}", self.total_expanded().separated_string())?;
        writeln!(f, "total reached duplicates: {}", self.total_duplicates().separated_string())
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "States generated total: {}", self.total_generated().separated_string())?;
        writeln!(f, "Nodes expanded total: {}", self.total_expanded().separated_string())?;
        writeln!(f, "Reached duplicates total: {}", self.total_duplicates().separated_string())?;
        writeln!(f)?;

        writeln!(f, "{:<15}{:<15}{:<15}{}", "Depth", "Generated", "Expanded", "Duplicates")?;
        let depths = self
            .generated_states
            .len()
            .max(self.expanded_states.len())
            .max(self.duplicate_states.len());
        for i in 0..depths {
            let get = |counts: &Vec<u64>| counts.get(i).cloned().unwrap_or(0);
            writeln!(
                f,
                "{:<15}{:<15}{:<15}{}",
                format!("{}:", i),
                get(&self.generated_states).separated_string(),
                get(&self.expanded_states).separated_string(),
                get(&self.duplicate_states).separated_string(),
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting_by_depth() {
        let mut stats = Stats::new();
        assert!(stats.add_generated(0));
        assert!(!stats.add_generated(0));
        assert!(stats.add_generated(3));
        assert!(stats.add_expanded(1));
        assert!(stats.add_duplicate(2));
        assert!(!stats.add_duplicate(1));

        assert_eq!(stats.generated_states, vec![2, 0, 0, 1]);
        assert_eq!(stats.expanded_states, vec![0, 1]);
        assert_eq!(stats.duplicate_states, vec![0, 1, 1]);
        assert_eq!(stats.total_generated(), 3);
        assert_eq!(stats.total_expanded(), 1);
        assert_eq!(stats.total_duplicates(), 2);
    }

    #[test]
    fn formatting() {
        let mut stats = Stats::new();
        for _ in 0..1234 {
            stats.add_generated(1);
        }
        stats.add_expanded(0);

        let expected = "\
States generated total: 1,234
Nodes expanded total: 1
Reached duplicates total: 0

Depth          Generated      Expanded       Duplicates
0:             0              1              0
1:             1,234          0              0
";
        assert_eq!(stats.to_string(), expected);
    }
}
