//! Selector engine
//!
//! Supports the subset used by widgets: type, universal, class, id and
//! attribute (`[name]`, `[name=value]`) compounds joined by descendant or
//! child combinators, in comma-separated lists.

use crate::{DomError, DomTree, ElementData, NodeId};

/// Attribute condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrMatch {
    Exists(String),
    Equals(String, String),
}

impl AttrMatch {
    fn matches(&self, elem: &ElementData) -> bool {
        match self {
            Self::Exists(name) => elem.has_attr(name),
            Self::Equals(name, value) => elem.get_attr(name) == Some(value.as_str()),
        }
    }
}

/// Compound selector: all parts must match the same element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compound {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: Vec<AttrMatch>,
}

impl Compound {
    pub fn matches(&self, elem: &ElementData) -> bool {
        if let Some(tag) = &self.tag {
            if !elem.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if elem.id() != Some(id.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|c| elem.classes().contains(c))
            && self.attrs.iter().all(|a| a.matches(elem))
    }

    fn is_empty(&self) -> bool {
        self.tag.is_none() && self.id.is_none() && self.classes.is_empty() && self.attrs.is_empty()
    }
}

/// Relationship between a compound and the one to its left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    Descendant,
    Child,
}

/// `(ids, classes + attributes, types)`
pub type Specificity = (u32, u32, u32);

/// Complex selector, stored left to right
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    /// First compound has no combinator
    parts: Vec<(Combinator, Compound)>,
}

impl Selector {
    /// Does `node` match this selector?
    pub fn matches(&self, tree: &DomTree, node: NodeId) -> bool {
        self.matches_from(tree, node, self.parts.len())
    }

    fn matches_from(&self, tree: &DomTree, node: NodeId, end: usize) -> bool {
        let Some((combinator, compound)) = end.checked_sub(1).and_then(|i| self.parts.get(i)) else {
            return true;
        };
        let Some(elem) = tree.element(node) else { return false };
        if !compound.matches(elem) {
            return false;
        }
        if end == 1 {
            return true;
        }
        match combinator {
            Combinator::Child => tree
                .parent(node)
                .is_some_and(|p| self.matches_from(tree, p, end - 1)),
            Combinator::Descendant => tree
                .ancestors(node)
                .any(|a| self.matches_from(tree, a, end - 1)),
        }
    }

    pub fn specificity(&self) -> Specificity {
        self.parts.iter().fold((0, 0, 0), |(a, b, c), (_, compound)| {
            (
                a + compound.id.is_some() as u32,
                b + (compound.classes.len() + compound.attrs.len()) as u32,
                c + compound.tag.is_some() as u32,
            )
        })
    }
}

/// Comma-separated selector list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList {
    selectors: Vec<Selector>,
}

impl SelectorList {
    /// Parse a selector list
    pub fn parse(input: &str) -> Result<Self, DomError> {
        let mut selectors = Vec::new();
        for part in split_top_level(input) {
            selectors.push(Parser::new(input, part).parse_complex()?);
        }
        if selectors.is_empty() {
            return Err(invalid(input, "empty selector"));
        }
        Ok(Self { selectors })
    }

    pub fn matches(&self, tree: &DomTree, node: NodeId) -> bool {
        self.selectors.iter().any(|s| s.matches(tree, node))
    }

    /// Highest specificity among the selectors matching `node`
    pub fn matching_specificity(&self, tree: &DomTree, node: NodeId) -> Option<Specificity> {
        self.selectors
            .iter()
            .filter(|s| s.matches(tree, node))
            .map(Selector::specificity)
            .max()
    }

    /// Matching strict descendants of `root`, in document order
    pub fn select_all(&self, tree: &DomTree, root: NodeId) -> Vec<NodeId> {
        tree.descendants(root).filter(|&n| self.matches(tree, n)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Selector> {
        self.selectors.iter()
    }
}

fn invalid(selector: &str, reason: &str) -> DomError {
    DomError::InvalidSelector {
        selector: selector.to_string(),
        reason: reason.to_string(),
    }
}

/// Split on commas outside brackets and quotes
fn split_top_level(input: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0u32;
    let mut quote: Option<char> = None;
    let mut start = 0;
    for (i, c) in input.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '\'' | '"') => quote = Some(c),
            (None, '[') => depth += 1,
            (None, ']') => depth = depth.saturating_sub(1),
            (None, ',') if depth == 0 => {
                parts.push(&input[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&input[start..]);
    parts
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

struct Parser<'a> {
    full: &'a str,
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Parser<'a> {
    fn new(full: &'a str, part: &'a str) -> Self {
        Self {
            full,
            chars: part.chars().peekable(),
        }
    }

    fn err(&self, reason: &str) -> DomError {
        invalid(self.full, reason)
    }

    fn skip_ws(&mut self) -> bool {
        let mut skipped = false;
        while self.chars.peek().is_some_and(|c| c.is_whitespace()) {
            self.chars.next();
            skipped = true;
        }
        skipped
    }

    fn ident(&mut self) -> Result<String, DomError> {
        let mut out = String::new();
        while let Some(&c) = self.chars.peek() {
            if !is_ident_char(c) {
                break;
            }
            out.push(c);
            self.chars.next();
        }
        if out.is_empty() {
            return Err(self.err("expected identifier"));
        }
        Ok(out)
    }

    fn parse_complex(&mut self) -> Result<Selector, DomError> {
        let mut parts = Vec::new();
        let mut combinator = Combinator::Descendant;
        self.skip_ws();
        loop {
            let compound = self.parse_compound()?;
            parts.push((combinator, compound));

            let had_ws = self.skip_ws();
            match self.chars.peek() {
                None => break,
                Some('>') => {
                    self.chars.next();
                    self.skip_ws();
                    combinator = Combinator::Child;
                }
                Some(_) if had_ws => combinator = Combinator::Descendant,
                Some(&c) => return Err(self.err(&format!("unexpected '{c}'"))),
            }
        }
        Ok(Selector { parts })
    }

    fn parse_compound(&mut self) -> Result<Compound, DomError> {
        let mut compound = Compound::default();
        let mut universal = false;

        match self.chars.peek() {
            Some('*') => {
                self.chars.next();
                universal = true;
            }
            Some(&c) if is_ident_char(c) => compound.tag = Some(self.ident()?.to_ascii_lowercase()),
            _ => {}
        }

        while let Some(&c) = self.chars.peek() {
            match c {
                '.' => {
                    self.chars.next();
                    compound.classes.push(self.ident()?);
                }
                '#' => {
                    self.chars.next();
                    compound.id = Some(self.ident()?);
                }
                '[' => {
                    self.chars.next();
                    compound.attrs.push(self.parse_attr()?);
                }
                _ => break,
            }
        }

        if compound.is_empty() && !universal {
            return Err(self.err("expected selector"));
        }
        Ok(compound)
    }

    fn parse_attr(&mut self) -> Result<AttrMatch, DomError> {
        self.skip_ws();
        let name = self.ident()?.to_ascii_lowercase();
        self.skip_ws();
        match self.chars.next() {
            Some(']') => Ok(AttrMatch::Exists(name)),
            Some('=') => {
                self.skip_ws();
                let value = match self.chars.peek() {
                    Some(&q) if q == '\'' || q == '"' => {
                        self.chars.next();
                        let mut value = String::new();
                        loop {
                            match self.chars.next() {
                                Some(c) if c == q => break,
                                Some(c) => value.push(c),
                                None => return Err(self.err("unterminated string")),
                            }
                        }
                        value
                    }
                    _ => self.ident()?,
                };
                self.skip_ws();
                match self.chars.next() {
                    Some(']') => Ok(AttrMatch::Equals(name, value)),
                    _ => Err(self.err("expected ']'")),
                }
            }
            _ => Err(self.err("unsupported attribute operator")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_focus_selector() {
        let list = SelectorList::parse("a, button, input, [tabindex='0']").unwrap();
        assert_eq!(list.iter().count(), 4);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(SelectorList::parse("").is_err());
        assert!(SelectorList::parse("div,").is_err());
        assert!(SelectorList::parse("[tabindex='0'").is_err());
        assert!(SelectorList::parse("a ~ b").is_err());
    }

    #[test]
    fn test_specificity() {
        let list = SelectorList::parse("#main li.pos[data-x]").unwrap();
        let selector = list.iter().next().unwrap();
        assert_eq!(selector.specificity(), (1, 2, 1));
    }

    #[test]
    fn test_combinators() {
        let mut tree = DomTree::new();
        let ul = tree.create_element("ul");
        let li = tree.create_element("li");
        let span = tree.create_element("span");
        tree.element_mut(ul).unwrap().set_attr("class", "carousel-tablist");
        tree.element_mut(span).unwrap().set_attr("class", "pos");
        tree.append_child(tree.root(), ul);
        tree.append_child(ul, li);
        tree.append_child(li, span);

        let descendant = SelectorList::parse(".carousel-tablist .pos").unwrap();
        let child = SelectorList::parse(".carousel-tablist > .pos").unwrap();
        assert!(descendant.matches(&tree, span));
        assert!(!child.matches(&tree, span));
        let children = SelectorList::parse("ul > li").unwrap();
        assert_eq!(children.select_all(&tree, tree.root()), vec![li]);
    }

    #[test]
    fn test_attribute_values() {
        let mut tree = DomTree::new();
        let input = tree.create_element("input");
        tree.element_mut(input).unwrap().set_attr("type", "hidden");
        tree.append_child(tree.root(), input);

        assert!(SelectorList::parse("input[type=hidden]").unwrap().matches(&tree, input));
        assert!(SelectorList::parse("[type=\"hidden\"]").unwrap().matches(&tree, input));
        assert!(!SelectorList::parse("[type='text']").unwrap().matches(&tree, input));
    }
}
