//! Server-rendered HTML.
//!
//! Every interpolated value goes through `html_escape`; model output is
//! never trusted as markup.

use bookwright_core::{OutlinePrompt, TreeNode};
use html_escape::{encode_double_quoted_attribute, encode_text};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #1f2933; }
header, footer { background: #1f2933; color: #f5f7fa; padding: 0.75rem 1.25rem; }
header { display: flex; justify-content: space-between; align-items: center; }
header a, header button { color: #f5f7fa; }
footer { font-size: 0.85rem; }
.layout { display: grid; grid-template-columns: 16rem 1fr 16rem; min-height: calc(100vh - 6rem); }
aside { background: #f5f7fa; padding: 1rem; }
aside.closed { display: none; }
main { padding: 1rem 1.5rem; }
textarea { width: 100%; min-height: 6rem; margin-bottom: 0.75rem; }
.actions button { margin-right: 0.5rem; }
.notice { color: #b91c1c; }
.outline-tree, .outline-tree ul { list-style: none; padding-left: 1.25rem; }
.node-id { font-weight: 600; margin-right: 0.35rem; }
.error { color: #b91c1c; }
"#;

fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        encode_text(title),
        STYLE,
        body
    )
}

/// Login form; `notice` is shown above it after a failed attempt.
pub fn login_page(notice: Option<&str>) -> String {
    let notice = notice
        .map(|text| format!("<p class=\"notice\" role=\"alert\">{}</p>", encode_text(text)))
        .unwrap_or_default();

    let body = format!(
        r#"<main>
<h1>Bookwright</h1>
{notice}
<form method="post" action="/login">
<p><label>Username <input name="username" autocomplete="username" autofocus required></label></p>
<p><label>Password <input name="password" type="password" autocomplete="current-password" required></label></p>
<p><button type="submit">Log in</button></p>
</form>
</main>"#
    );
    document("Bookwright - Log in", &body)
}

/// Landing page for an authenticated user.
pub fn hello_page(username: &str) -> String {
    let body = format!(
        r#"<main>
<h1>Hello {}!</h1>
<p><a href="/page_layout"><button type="button">Open the outline builder</button></a></p>
</main>"#,
        encode_text(username)
    );
    document("Bookwright", &body)
}

/// The outline builder: prompt fields, actions and the tree container.
pub fn layout_page(username: &str, prompt: &OutlinePrompt) -> String {
    let body = format!(
        r#"<header>
<button type="button" onclick="toggleDrawer('left-drawer')">&#9776;</button>
<strong>Bookwright outline builder</strong>
<span>{user} &middot; <a href="/page_layout">Log out</a>
<button type="button" onclick="toggleDrawer('right-drawer')">&#9776;</button></span>
</header>
<div class="layout">
<aside id="left-drawer">
<h2>Prompt</h2>
<p>Describe the author, the book and the answer format. The model replies with chapters, subchapters and sections.</p>
</aside>
<main>
<label for="persona">Persona</label>
<textarea id="persona" name="persona">{persona}</textarea>
<label for="structure">Structure</label>
<textarea id="structure" name="structure">{structure}</textarea>
<label for="formatting">Formatting</label>
<textarea id="formatting" name="formatting">{formatting}</textarea>
<div class="actions">
<button type="button" id="build" onclick="buildChapters()">Build Chapters!</button>
<button type="button" id="expand" onclick="expandAll()">Expand All</button>
</div>
<p id="status" class="error" role="status"></p>
<div id="tree"></div>
</main>
<aside id="right-drawer" class="closed">
<h2>Outline</h2>
<p id="book-id">Not saved</p>
</aside>
</div>
<footer>Bookwright</footer>
<script>
function toggleDrawer(id) {{
  document.getElementById(id).classList.toggle('closed');
}}
function expandAll() {{
  document.querySelectorAll('#tree details').forEach(function (d) {{ d.open = true; }});
}}
async function buildChapters() {{
  const status = document.getElementById('status');
  const button = document.getElementById('build');
  status.textContent = '';
  button.disabled = true;
  try {{
    const response = await fetch('/api/outline', {{
      method: 'POST',
      headers: {{ 'Content-Type': 'application/json' }},
      body: JSON.stringify({{
        persona: document.getElementById('persona').value,
        structure: document.getElementById('structure').value,
        formatting: document.getElementById('formatting').value
      }})
    }});
    const data = await response.json();
    if (!response.ok) {{
      status.textContent = data.error || ('Request failed with status ' + response.status);
      return;
    }}
    document.getElementById('tree').innerHTML = data.html;
    document.getElementById('book-id').textContent =
      data.book_id === null ? 'Not saved' : ('Saved as book ' + data.book_id);
  }} catch (err) {{
    status.textContent = String(err);
  }} finally {{
    button.disabled = false;
  }}
}}
</script>"#,
        user = encode_text(username),
        persona = encode_text(prompt.persona()),
        structure = encode_text(prompt.structure()),
        formatting = encode_text(prompt.formatting()),
    );
    document("Bookwright - Outline builder", &body)
}

/// Renders a display tree as nested `<details>` elements.
///
/// Branches become collapsible entries; leaves become plain list items.
pub fn render_tree(nodes: &[TreeNode]) -> String {
    let mut html = String::from("<ul class=\"outline-tree\">");
    push_nodes(&mut html, nodes);
    html.push_str("</ul>");
    html
}

fn push_nodes(html: &mut String, nodes: &[TreeNode]) {
    for node in nodes {
        let label = format!(
            "<span class=\"node-id\">{}</span>{}",
            encode_text(node.id()),
            encode_text(node.description())
        );
        if node.is_leaf() {
            html.push_str(&format!(
                "<li class=\"leaf\" data-id=\"{}\">{}</li>",
                encode_double_quoted_attribute(node.id()),
                label
            ));
        } else {
            html.push_str(&format!(
                "<li data-id=\"{}\"><details><summary>{}</summary><ul>",
                encode_double_quoted_attribute(node.id()),
                label
            ));
            push_nodes(html, node.child_nodes());
            html.push_str("</ul></details></li>");
        }
    }
}
