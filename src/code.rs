//! Code table generation: tree walk to per-symbol bit strings.

use std::collections::HashMap;

use crate::tree::HuffmanNode;

/// Mapping from symbol to its prefix-free code, written as a "0"/"1"
/// string. Transient: recomputed whenever a tree exists.
pub type CodeTable = HashMap<char, String>;

/// Walk the tree depth-first and assign each leaf the code spelled by its
/// path: '0' per step to a `zero` child, '1' per step to a `one` child.
///
/// A leaf reached with an empty prefix (a bare leaf root) gets "0" so that
/// every code is non-empty. Codes are prefix-free by construction: a leaf
/// ends every path, so no symbol's path can continue into another's.
pub fn build_code_table(root: &HuffmanNode) -> CodeTable {
    let mut table = CodeTable::new();
    assign_codes(root, String::new(), &mut table);
    table
}

fn assign_codes(node: &HuffmanNode, prefix: String, table: &mut CodeTable) {
    match node {
        HuffmanNode::Leaf { symbol, .. } => {
            let code = if prefix.is_empty() {
                "0".to_string()
            } else {
                prefix
            };
            table.insert(*symbol, code);
        }
        HuffmanNode::Internal { zero, one, .. } => {
            let mut zero_prefix = prefix.clone();
            zero_prefix.push('0');
            assign_codes(zero, zero_prefix, table);
            if let Some(one) = one {
                let mut one_prefix = prefix;
                one_prefix.push('1');
                assign_codes(one, one_prefix, table);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::count_symbols;
    use crate::tree::build_tree;

    fn table_for(input: &str) -> CodeTable {
        let freq = count_symbols(input);
        let root = build_tree(&freq).expect("tree should exist");
        build_code_table(&root)
    }

    #[test]
    fn test_single_symbol_gets_zero_code() {
        let table = table_for("aaaa");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(&'a'), Some(&"0".to_string()));
    }

    #[test]
    fn test_every_symbol_has_a_code() {
        let input = "this is an example for huffman encoding";
        let table = table_for(input);
        for ch in input.chars() {
            assert!(table.contains_key(&ch), "missing code for {:?}", ch);
        }
    }

    #[test]
    fn test_codes_are_non_empty() {
        for input in ["a", "ab", "abracadabra"] {
            for (symbol, code) in table_for(input) {
                assert!(!code.is_empty(), "empty code for {:?}", symbol);
            }
        }
    }

    #[test]
    fn test_codes_are_prefix_free() {
        let table = table_for("abracadabra");
        let codes: Vec<&String> = table.values().collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(
                        !b.starts_with(a.as_str()),
                        "{} is a prefix of {}",
                        a,
                        b
                    );
                }
            }
        }
    }

    #[test]
    fn test_rarer_symbols_get_longer_codes() {
        // a occurs 5 times, c and d once each
        let table = table_for("abracadabra");
        let a = table[&'a'].len();
        let c = table[&'c'].len();
        let d = table[&'d'].len();
        assert!(a <= c);
        assert!(a <= d);
    }
}
