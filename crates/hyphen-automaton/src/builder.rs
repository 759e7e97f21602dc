// Trie construction and fallback linking.
//
// The builder owns the only mutable view of the state table plus a
// construction-time map from pattern-prefix strings to state indices. The
// map exists solely to make get-or-create and suffix lookups cheap while
// patterns stream in; `finish()` drops it and hands out the immutable
// state table.

use hashbrown::HashMap;

use crate::state::{ROOT, State, StateId, Transition};

pub(crate) struct AutomatonBuilder {
    states: Vec<State>,
    index: HashMap<Box<[u8]>, StateId>,
}

impl AutomatonBuilder {
    pub(crate) fn new() -> Self {
        let mut index = HashMap::new();
        index.insert(Box::from(&b""[..]), ROOT);
        Self {
            states: vec![State::default()],
            index,
        }
    }

    /// Get the state for `key`, creating it if it does not exist yet.
    fn state_for(&mut self, key: &[u8]) -> StateId {
        if let Some(&id) = self.index.get(key) {
            return id;
        }
        let id = self.states.len() as StateId;
        self.index.insert(key.into(), id);
        self.states.push(State::default());
        id
    }

    /// Insert one pattern: attach its weights to the full-word state and
    /// wire the prefix chain.
    ///
    /// Walks the word back to front. Each round peels the trailing byte,
    /// gets or creates the shorter prefix's state, and adds the transition
    /// `prefix --byte--> longer`. The walk stops after wiring the
    /// transition out of the first prefix that already existed: everything
    /// below it is wired from an earlier pattern, and the empty string
    /// (the root) is registered up front so the walk always terminates.
    /// A repeated pattern word replaces the earlier weights.
    pub(crate) fn insert_pattern(&mut self, word: &[u8], weights: Vec<u8>) {
        let mut existed = self.index.contains_key(word);
        let mut state = self.state_for(word);
        self.states[state as usize].match_weights = Some(weights.into_boxed_slice());

        let mut end = word.len();
        while !existed && end > 0 {
            end -= 1;
            let longer = state;
            let byte = word[end];
            let prefix = &word[..end];
            existed = self.index.contains_key(prefix);
            state = self.state_for(prefix);
            self.states[state as usize]
                .transitions
                .push(Transition { byte, target: longer });
        }
    }

    /// Link every non-root state's fallback to the state of the longest
    /// proper suffix of its string. The empty string is always in the
    /// index, so the scan cannot run dry; the root keeps no fallback.
    pub(crate) fn link_fallbacks(&mut self) {
        for (key, &id) in &self.index {
            if id == ROOT {
                continue;
            }
            for start in 1..=key.len() {
                if let Some(&target) = self.index.get(&key[start..]) {
                    self.states[id as usize].fallback = Some(target);
                    break;
                }
            }
        }
    }

    /// Consume the builder, dropping the construction map.
    pub(crate) fn finish(self) -> Vec<State> {
        self.states
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built(patterns: &[(&str, &str)]) -> Vec<State> {
        let mut b = AutomatonBuilder::new();
        for (word, weights) in patterns {
            b.insert_pattern(word.as_bytes(), weights.bytes().collect());
        }
        b.link_fallbacks();
        b.finish()
    }

    fn walk(states: &[State], word: &str) -> Option<StateId> {
        let mut state = ROOT;
        for b in word.bytes() {
            state = states[state as usize].transition(b)?;
        }
        Some(state)
    }

    #[test]
    fn single_pattern_builds_prefix_chain() {
        let states = built(&[("hyph", "300")]);
        // root + h, hy, hyp, hyph
        assert_eq!(states.len(), 5);
        let end = walk(&states, "hyph").unwrap();
        assert_eq!(states[end as usize].match_weights(), Some(&b"300"[..]));
        // Intermediate states carry no match.
        let mid = walk(&states, "hy").unwrap();
        assert!(states[mid as usize].match_weights().is_none());
    }

    #[test]
    fn shared_prefixes_are_reused() {
        let states = built(&[("hen", "20"), ("hena", "4")]);
        // root + h, he, hen, hena -- "hena" adds one state, not four.
        assert_eq!(states.len(), 5);
        assert!(walk(&states, "hen").is_some());
        assert!(walk(&states, "hena").is_some());
    }

    #[test]
    fn duplicate_word_overwrites_weights() {
        let states = built(&[("ab", "100"), ("ab", "300")]);
        let end = walk(&states, "ab").unwrap();
        assert_eq!(states[end as usize].match_weights(), Some(&b"300"[..]));
    }

    #[test]
    fn empty_word_attaches_to_root() {
        let states = built(&[("", "7")]);
        assert_eq!(states.len(), 1);
        assert_eq!(states[ROOT as usize].match_weights(), Some(&b"7"[..]));
    }

    #[test]
    fn root_has_no_fallback() {
        let states = built(&[("ab", "100")]);
        assert!(states[ROOT as usize].fallback().is_none());
    }

    #[test]
    fn fallback_is_longest_proper_suffix_state() {
        let states = built(&[("hyp", "10"), ("yphen", "30")]);
        // "hyp" falls back to "yp" (a prefix of "yphen"), not to the root.
        let hyp = walk(&states, "hyp").unwrap();
        let yp = walk(&states, "yp").unwrap();
        assert_eq!(states[hyp as usize].fallback(), Some(yp));
        // "hy" has no suffix state other than "y".
        let hy = walk(&states, "hy").unwrap();
        let y = walk(&states, "y").unwrap();
        assert_eq!(states[hy as usize].fallback(), Some(y));
        // States with no proper-suffix state fall back to the root.
        let h = walk(&states, "h").unwrap();
        assert_eq!(states[h as usize].fallback(), Some(ROOT));
    }

    #[test]
    fn fallback_holds_for_every_state() {
        // The quantified form: every non-root state's fallback string is
        // the longest proper suffix with a live state.
        let states = built(&[("hen", "20"), ("en", "10"), ("n", "5")]);
        let hen = walk(&states, "hen").unwrap();
        let he = walk(&states, "he").unwrap();
        let en = walk(&states, "en").unwrap();
        let e = walk(&states, "e").unwrap();
        let n = walk(&states, "n").unwrap();
        assert_eq!(states[hen as usize].fallback(), Some(en));
        assert_eq!(states[he as usize].fallback(), Some(e));
        assert_eq!(states[en as usize].fallback(), Some(n));
        assert_eq!(states[e as usize].fallback(), Some(ROOT));
        assert_eq!(states[n as usize].fallback(), Some(ROOT));
    }
}
