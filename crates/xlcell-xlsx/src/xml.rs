//! Helpers over the `roxmltree` node API
//!
//! Elements are matched by local name so prefixed documents (`<x:c>`) read the same as
//! default-namespace ones.

use std::borrow::Cow;

use roxmltree::Node;

/// First child element with the given local name
pub(crate) fn first_child<'a, 'input>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}

/// Child elements with the given local name, in document order
pub(crate) fn children_named<'a, 'input>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |n| n.is_element() && n.tag_name().name() == name)
}

/// Character data directly inside an element
///
/// Borrowed when the element holds a single text node.
pub(crate) fn element_text<'a>(node: Node<'a, '_>) -> Cow<'a, str> {
    let mut parts = node.children().filter(|n| n.is_text()).filter_map(|n| n.text());

    let Some(first) = parts.next() else {
        return Cow::Borrowed("");
    };
    match parts.next() {
        None => Cow::Borrowed(first),
        Some(second) => {
            let mut text = String::from(first);
            text.push_str(second);
            text.extend(parts);
            Cow::Owned(text)
        }
    }
}
