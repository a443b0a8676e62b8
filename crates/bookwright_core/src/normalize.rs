//! Outline normalization: [`Book`] to display tree.
//!
//! Node ids are rebuilt from 1-based positions on every pass, never taken from
//! the numbers the model reported, so a chapter list with gaps or duplicates
//! still yields unique dotted ids.

use crate::{Book, Chapter, Section, Subchapter, TreeNode};
use tracing::{debug, instrument};

/// Converts a book into a display tree with a single synthetic root.
///
/// The root's id is the book title and its description is the subtitle.
///
/// # Examples
///
/// ```
/// use bookwright_core::{Book, Chapter, outline_to_tree};
///
/// let book = Book::builder()
///     .title("T")
///     .subtitle("S")
///     .chapters(vec![Chapter::builder().title("Intro").pages(3u32).build().unwrap()])
///     .build()
///     .unwrap();
///
/// let tree = outline_to_tree(&book);
/// assert_eq!(tree.len(), 1);
/// assert_eq!(tree[0].id(), "T");
/// assert_eq!(tree[0].child_nodes()[0].id(), "1");
/// assert_eq!(tree[0].child_nodes()[0].description(), "Intro (3)");
/// ```
#[instrument(skip(book), fields(title = %book.title()))]
pub fn outline_to_tree(book: &Book) -> Vec<TreeNode> {
    let chapters = book
        .chapters()
        .iter()
        .enumerate()
        .map(|(i, chapter)| chapter_node(i + 1, chapter))
        .collect::<Vec<_>>();

    let root = TreeNode::branch(book.title().clone(), book.subtitle().clone(), chapters);
    debug!(nodes = root.count(), "Normalized outline");
    vec![root]
}

fn chapter_node(position: usize, chapter: &Chapter) -> TreeNode {
    let id = position.to_string();
    let children = chapter
        .subchapters()
        .iter()
        .enumerate()
        .map(|(j, sub)| subchapter_node(&id, j + 1, sub))
        .collect();

    TreeNode::branch(
        id.clone(),
        describe(chapter.title(), chapter.description(), *chapter.pages()),
        children,
    )
}

fn subchapter_node(parent: &str, position: usize, sub: &Subchapter) -> TreeNode {
    let id = format!("{parent}.{position}");
    let children = sub
        .sections()
        .iter()
        .enumerate()
        .map(|(k, section)| section_node(&id, k + 1, section))
        .collect();

    TreeNode::branch(
        id.clone(),
        describe(sub.title(), sub.description(), *sub.pages()),
        children,
    )
}

fn section_node(parent: &str, position: usize, section: &Section) -> TreeNode {
    TreeNode::leaf(
        format!("{parent}.{position}"),
        describe(section.title(), section.description(), *section.pages()),
    )
}

/// Builds a node label: `"{title} - {description} ({pages})"`.
///
/// An empty description drops the ` - {description}` part and a missing page
/// count drops the ` ({pages})` part.
pub fn describe(title: &str, description: &str, pages: Option<u32>) -> String {
    let mut label = title.trim().to_string();
    let description = description.trim();
    if !description.is_empty() {
        if !label.is_empty() {
            label.push_str(" - ");
        }
        label.push_str(description);
    }
    if let Some(pages) = pages {
        if !label.is_empty() {
            label.push(' ');
        }
        label.push_str(&format!("({pages})"));
    }
    label
}
