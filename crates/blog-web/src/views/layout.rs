//! Page shell shared by every view

use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Inline stylesheet; the app serves no static assets.
const STYLES: &str = r"
body { margin: 0; font-family: system-ui, sans-serif; color: #222; background: #f6f6f4; }
header { background: #fff; border-bottom: 1px solid #ddd; }
header nav { max-width: 40rem; margin: 0 auto; padding: 0.75rem 1rem; display: flex; gap: 1rem; }
header nav a { color: #1a5fb4; text-decoration: none; }
main { max-width: 40rem; margin: 1.5rem auto; padding: 0 1rem; }
h1 { font-size: 1.4rem; }
form { display: flex; flex-direction: column; gap: 0.5rem; max-width: 24rem; }
input, textarea { padding: 0.5rem; border: 1px solid #bbb; border-radius: 4px; font: inherit; }
button { padding: 0.5rem 1rem; border: none; border-radius: 4px; background: #1a5fb4; color: #fff; cursor: pointer; align-self: flex-start; }
ul.posts { list-style: none; padding: 0; }
li.post, article.post { background: #fff; border: 1px solid #ddd; border-radius: 6px; padding: 0.75rem 1rem; margin-bottom: 0.75rem; }
.post-meta { display: flex; gap: 0.75rem; font-size: 0.85rem; color: #666; }
.post-meta .author { font-weight: 600; color: #222; }
.post-actions { display: flex; gap: 0.75rem; align-items: center; margin-top: 0.5rem; }
.post-actions button.delete { background: #c01c28; padding: 0.25rem 0.75rem; align-self: auto; }
p.error { background: #fde3e1; border: 1px solid #e8b6b2; color: #a51d2d; padding: 0.5rem 0.75rem; border-radius: 4px; max-width: 24rem; }
nav.pager { display: flex; gap: 1rem; margin: 1rem 0; }
";

/// Wrap page content in the common shell with the top navigation
pub fn layout(title: &str, logged_in: bool, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(STYLES)) }
            }
            body {
                header {
                    nav {
                        a href="/" { "Feed" }
                        @if logged_in {
                            a href="/create-post" { "New post" }
                            a href="/logout" { "Log out" }
                        } @else {
                            a href="/login" { "Log in" }
                            a href="/register" { "Register" }
                        }
                    }
                }
                main { (content) }
            }
        }
    }
}

/// Script wired to every delete button on the page.
///
/// Deletion goes through `DELETE /post/:id`; the response is JSON on
/// success and plain text on failure.
pub fn delete_script() -> Markup {
    html! {
        script {
            (PreEscaped(r#"
document.querySelectorAll('button.delete').forEach(function (button) {
    button.addEventListener('click', async function () {
        if (!confirm('Delete this post?')) { return; }
        const response = await fetch('/post/' + button.dataset.postId, { method: 'DELETE' });
        if (response.ok) {
            window.location.href = '/';
        } else {
            alert(await response.text());
        }
    });
});
"#))
        }
    }
}
