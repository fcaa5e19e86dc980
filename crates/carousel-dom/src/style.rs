//! Styles
//!
//! Inline declarations, author stylesheets parsed with lightningcss, and the
//! cascade that resolves a property for one element. There is no layout:
//! `width` resolves to the nearest declared width, which is how a block box
//! with `width: auto` behaves.

use std::fmt;

use lightningcss::properties::Property;
use lightningcss::stylesheet::{ParserOptions, PrinterOptions};
use lightningcss::traits::ToCss;

use crate::{DomError, DomTree, NodeId, SelectorList, Specificity};

/// Properties that inherit from the parent when not declared
const INHERITED: &[&str] = &["visibility", "color", "font-size", "cursor"];

/// Elements displayed as blocks by default
const BLOCK_TAGS: &[&str] = &[
    "html", "body", "div", "section", "article", "aside", "nav", "main", "header", "footer", "ul",
    "ol", "p", "form", "figure", "h1", "h2", "h3",
];

fn parser_options<'o, 'i>() -> ParserOptions<'o, 'i> {
    ParserOptions {
        error_recovery: true,
        ..ParserOptions::default()
    }
}

/// Ordered `property: value` pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDeclarations {
    decls: Vec<(String, String)>,
}

impl StyleDeclarations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `style` attribute (`left: 0px; display: none`).
    ///
    /// Invalid declarations are dropped; `!important` ones override the rest.
    pub fn parse(text: &str) -> Self {
        use lightningcss::stylesheet::StyleAttribute;

        match StyleAttribute::parse(text, parser_options()) {
            Ok(attr) => {
                let block = &attr.declarations;
                let properties = block.declarations.iter().chain(&block.important_declarations);
                Self::from_properties(properties)
            }
            Err(e) => {
                tracing::debug!("Ignoring style attribute {:?}: {}", text, e);
                Self::new()
            }
        }
    }

    fn from_properties<'a, 'i: 'a>(properties: impl IntoIterator<Item = &'a Property<'i>>) -> Self {
        let mut out = Self::new();
        for property in properties {
            out.push_property(property);
        }
        out
    }

    fn push_property(&mut self, property: &Property) {
        let name = property.property_id().name().to_string();
        match property.value_to_css_string(PrinterOptions::default()) {
            Ok(value) => self.set(&name, &value),
            Err(e) => tracing::debug!("Cannot serialize {}: {}", name, e),
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.decls
            .iter()
            .find(|(p, _)| p.eq_ignore_ascii_case(property))
            .map(|(_, v)| v.as_str())
    }

    pub fn set(&mut self, property: &str, value: &str) {
        let property = property.trim().to_ascii_lowercase();
        match self.decls.iter_mut().find(|(p, _)| *p == property) {
            Some(slot) => slot.1 = value.trim().to_string(),
            None => self.decls.push((property, value.trim().to_string())),
        }
    }

    pub fn remove(&mut self, property: &str) {
        self.decls.retain(|(p, _)| !p.eq_ignore_ascii_case(property));
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.decls.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }
}

impl fmt::Display for StyleDeclarations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (p, v)) in self.decls.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{p}: {v}")?;
        }
        Ok(())
    }
}

/// `selector { declarations }`
#[derive(Debug, Clone)]
pub struct StyleRule {
    pub selectors: SelectorList,
    pub declarations: StyleDeclarations,
    /// `!important` declarations
    pub important: StyleDeclarations,
}

/// Author stylesheet
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    rules: Vec<StyleRule>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(css: &str) -> Result<Self, DomError> {
        let mut sheet = Self::new();
        sheet.append(css)?;
        Ok(sheet)
    }

    /// Append the style rules of another CSS source.
    ///
    /// At-rules are skipped, as are selectors this DOM cannot match
    /// (pseudo-classes, pseudo-elements).
    pub fn append(&mut self, css: &str) -> Result<(), DomError> {
        use lightningcss::rules::CssRule;

        let sheet = lightningcss::stylesheet::StyleSheet::parse(css, parser_options())
            .map_err(|e| DomError::InvalidStyleSheet(e.to_string()))?;

        for rule in sheet.rules.0.iter() {
            match rule {
                CssRule::Style(style) => {
                    if let Some(rule) = convert_style_rule(style) {
                        self.rules.push(rule);
                    }
                }
                _ => tracing::trace!("Skipping at-rule"),
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Winning stylesheet value for `property` on `node`: important
    /// declarations first, then highest specificity, later rules breaking ties.
    pub fn cascaded_value(&self, tree: &DomTree, node: NodeId, property: &str) -> Option<&str> {
        self.winning(tree, node, property, |r| &r.important)
            .or_else(|| self.winning(tree, node, property, |r| &r.declarations))
    }

    fn winning<'a>(
        &'a self,
        tree: &DomTree,
        node: NodeId,
        property: &str,
        block: impl Fn(&'a StyleRule) -> &'a StyleDeclarations,
    ) -> Option<&'a str> {
        let mut best: Option<(Specificity, &str)> = None;
        for rule in &self.rules {
            let Some(value) = block(rule).get(property) else {
                continue;
            };
            let Some(spec) = rule.selectors.matching_specificity(tree, node) else {
                continue;
            };
            if best.is_none_or(|(b, _)| spec >= b) {
                best = Some((spec, value));
            }
        }
        best.map(|(_, v)| v)
    }

    /// Resolved value of `property` for an element
    pub fn computed_value(&self, tree: &DomTree, node: NodeId, property: &str) -> Option<String> {
        let elem = tree.element(node)?;
        let property = property.to_ascii_lowercase();

        let declared = elem
            .style()
            .get(&property)
            .or_else(|| self.cascaded_value(tree, node, &property))
            .filter(|v| !v.eq_ignore_ascii_case("inherit"));
        if let Some(value) = declared {
            return Some(value.to_string());
        }

        let parent_value = || {
            tree.parent(node)
                .filter(|&p| tree.element(p).is_some())
                .and_then(|p| self.computed_value(tree, p, &property))
        };

        let value = match property.as_str() {
            "display" if elem.has_attr("hidden") => "none".to_string(),
            "display" if elem.tag == "li" => "list-item".to_string(),
            "display" if BLOCK_TAGS.contains(&elem.tag.as_str()) => "block".to_string(),
            "display" => "inline".to_string(),
            "width" if self.is_block(tree, node) => {
                parent_value().unwrap_or_else(|| "auto".to_string())
            }
            p if INHERITED.contains(&p) => {
                parent_value().unwrap_or_else(|| initial_value(p).to_string())
            }
            p => initial_value(p).to_string(),
        };
        Some(value)
    }

    fn is_block(&self, tree: &DomTree, node: NodeId) -> bool {
        matches!(
            self.computed_value(tree, node, "display").as_deref(),
            Some("block" | "list-item" | "flex" | "grid")
        )
    }
}

fn initial_value(property: &str) -> &'static str {
    match property {
        "visibility" => "visible",
        "position" => "static",
        "color" => "canvastext",
        "opacity" => "1",
        _ => "auto",
    }
}

fn convert_style_rule(rule: &lightningcss::rules::style::StyleRule) -> Option<StyleRule> {
    let mut texts = Vec::new();
    for selector in rule.selectors.0.iter() {
        match selector.to_css_string(PrinterOptions::default()) {
            Ok(text) if SelectorList::parse(&text).is_ok() => texts.push(text),
            Ok(text) => tracing::trace!("Skipping unsupported selector {}", text),
            Err(e) => tracing::debug!("Cannot serialize selector: {}", e),
        }
    }
    if texts.is_empty() {
        return None;
    }
    let selectors = SelectorList::parse(&texts.join(", ")).ok()?;

    let block = &rule.declarations;
    Some(StyleRule {
        selectors,
        declarations: StyleDeclarations::from_properties(&block.declarations),
        important: StyleDeclarations::from_properties(&block.important_declarations),
    })
}

/// Parse a CSS pixel length (`"300px"`, `"-12.5px"`, `"0"`)
pub fn parse_px(value: &str) -> Option<f64> {
    let value = value.trim();
    let number = value.strip_suffix("px").unwrap_or(value).trim();
    if number.is_empty() {
        return None;
    }
    number.parse::<f64>().ok().filter(|n| n.is_finite())
}
