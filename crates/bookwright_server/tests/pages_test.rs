//! Server-rendered pages and tree markup.

use bookwright_core::{OutlinePrompt, TreeNode};
use bookwright_server::{layout_page, login_page, render_tree};

#[test]
fn test_tree_escapes_model_text() {
    let nodes = vec![TreeNode::branch(
        "<b>Book</b>",
        "Sub & title",
        vec![TreeNode::leaf("1", "\"quoted\" <script>")],
    )];

    let html = render_tree(&nodes);

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;b&gt;Book&lt;/b&gt;"));
    assert!(html.contains("Sub &amp; title"));
}

#[test]
fn test_branches_collapse_and_leaves_do_not() {
    let nodes = vec![TreeNode::branch(
        "Book",
        "",
        vec![TreeNode::branch("1", "Ch", vec![TreeNode::leaf("1.1.1", "Leaf")])],
    )];

    let html = render_tree(&nodes);

    assert_eq!(html.matches("<details>").count(), 2);
    assert_eq!(html.matches("class=\"leaf\"").count(), 1);
}

#[test]
fn test_login_page_shows_notice() {
    let page = login_page(Some("Wrong username or password"));
    assert!(page.contains("Wrong username or password"));
    assert!(!login_page(None).contains("class=\"notice\""));
}

#[test]
fn test_layout_prefills_prompt_fields() {
    let prompt = OutlinePrompt::new("A <persona>", "Structure", "Format");
    let page = layout_page("m", &prompt);

    assert!(page.contains("A &lt;persona&gt;"));
    assert!(page.contains("Build Chapters!"));
    assert!(page.contains("Expand All"));
    assert!(page.contains("id=\"tree\""));
}
