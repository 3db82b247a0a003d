//! Server-rendered HTML for the ChefAI web page.
//!
//! Everything interpolated into markup goes through [`escape_html`]; model
//! output and form values are never trusted.

use chefai_core::domain::{
    ingredient::{
        catalog::get_common_fridge_ingredients,
        selection::{IngredientSelection, SelectionStats},
    },
    recipe::{
        entities::{Mood, RecipeText},
        layout::{RecipeBlock, classify_recipe_text},
    },
};

use crate::application::http::pages::session::SessionContext;

/// Banner shown under the upload form.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Detected(usize),
    NoDetections,
    Error(String),
}

/// What to show below the picker.
#[derive(Debug, Clone, PartialEq)]
pub enum RecipePanel {
    Empty,
    Ready {
        selection: IngredientSelection,
        stats: SelectionStats,
        recipes: Result<RecipeText, String>,
    },
}

pub struct PageView<'a> {
    pub root_path: &'a str,
    pub session: &'a SessionContext,
    pub notice: Option<Notice>,
    pub panel: RecipePanel,
}

pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn render_page(view: &PageView<'_>) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>ChefAI</title>
    <style>{STYLE}</style>
</head>
<body>
<div class="container">
    <header class="main-header">
        <h1>👨‍🍳 ChefAI</h1>
        <p>Snap your fridge, get recipes</p>
    </header>
    <form method="post" action="{recipes_action}">
{upload}
{picker}
    </form>
{panel}
    <footer class="footer">
        <p><strong>ChefAI</strong> • Powered by OpenAI • Made with ❤️ for food lovers</p>
    </footer>
</div>
</body>
</html>
"#,
        recipes_action = escape_html(&format!("{}/recipes", view.root_path)),
        upload = render_upload_section(view.root_path, view.notice.as_ref()),
        picker = render_picker(view.session),
        panel = render_panel(&view.panel),
    )
}

fn render_upload_section(root_path: &str, notice: Option<&Notice>) -> String {
    let notice = match notice {
        Some(Notice::Detected(count)) => {
            format!(r#"<div class="notice success">✨ Detected {count} ingredients!</div>"#)
        }
        Some(Notice::NoDetections) => r#"<div class="notice info">🔍 No ingredients could be detected in this photo. Try a clearer shot or pick ingredients below.</div>"#.to_string(),
        Some(Notice::Error(message)) => format!(
            r#"<div class="notice error">{}</div>"#,
            escape_html(message)
        ),
        None => String::new(),
    };

    // Submitted with the picker fields, which share the enclosing form
    format!(
        r#"    <section class="section-card">
        <h2><span class="step-indicator">1</span>📸 Upload Your Fridge Photo</h2>
        <input type="file" name="image" accept=".jpg,.jpeg,.png">
        <button type="submit" formaction="{action}" formenctype="multipart/form-data">🤖 Analyze Photo</button>
        {notice}
    </section>"#,
        action = escape_html(&format!("{root_path}/analyze")),
    )
}

fn render_picker(session: &SessionContext) -> String {
    let hidden: String = session
        .suggested
        .iter()
        .map(|item| {
            format!(
                r#"<input type="hidden" name="suggested" value="{}">"#,
                escape_html(item)
            )
        })
        .collect();

    let ai_tab = if session.suggested.is_empty() {
        r#"<p class="notice info">🔍 Upload a photo above to see AI-detected ingredients here!</p>"#
            .to_string()
    } else {
        let boxes: String = session
            .suggested
            .iter()
            .map(|item| checkbox("ai", item, session.selected_ai.contains(item)))
            .collect();
        format!("<p>AI detected these ingredients in your photo:</p>\n{boxes}")
    };

    let common_tab: String = get_common_fridge_ingredients()
        .iter()
        .map(|category| {
            let boxes: String = category
                .items
                .iter()
                .map(|item| checkbox("common", item, session.selected_common.contains(item)))
                .collect();
            format!(
                "<fieldset><legend>{}</legend>{}</fieldset>\n",
                escape_html(&category.name),
                boxes
            )
        })
        .collect();

    let moods: String = Mood::ALL
        .iter()
        .map(|mood| {
            let label = escape_html(mood.label());
            let selected = if *mood == session.mood { " selected" } else { "" };
            format!(r#"<option value="{label}"{selected}>{label}</option>"#)
        })
        .collect();

    format!(
        r#"        {hidden}
        <section class="section-card">
            <h2><span class="step-indicator">2</span>🥘 Select Your Ingredients</h2>
            <h3>🤖 AI Detected</h3>
            <div class="ai-ingredients">{ai_tab}</div>
            <h3>🏪 Common Items</h3>
            <div class="common-ingredients">{common_tab}</div>
            <h3>✏️ Custom List</h3>
            <label for="custom">Add your own ingredients (comma-separated):</label>
            <textarea id="custom" name="custom" rows="4" placeholder="olive oil, garlic, herbs, leftover chicken, rice...">{custom}</textarea>
        </section>
        <section class="section-card recipe-section">
            <h2><span class="step-indicator">3</span>🎯 Generate Your Recipes</h2>
            <label for="mood">What's your cooking mood today?</label>
            <select id="mood" name="mood">{moods}</select>
            <button type="submit" class="main-generate-btn">✨ Create My Recipes</button>
        </section>"#,
        custom = escape_html(&session.custom_text),
    )
}

fn checkbox(name: &str, value: &str, checked: bool) -> String {
    let value = escape_html(value);
    let checked = if checked { " checked" } else { "" };
    format!(
        r#"<label class="ingredient-option"><input type="checkbox" name="{name}" value="{value}"{checked}> {value}</label>"#
    )
}

fn render_panel(panel: &RecipePanel) -> String {
    match panel {
        RecipePanel::Empty => r#"    <section class="empty-state">
        <h3>👆 Ready to get cooking?</h3>
        <p>Upload a photo or select ingredients above to discover amazing recipes tailored just for you!</p>
    </section>"#
            .to_string(),
        RecipePanel::Ready {
            selection,
            stats,
            recipes,
        } => {
            let tags: String = selection
                .items()
                .iter()
                .map(|item| {
                    format!(
                        r#"<span class="ingredient-tag">{}</span>"#,
                        escape_html(item)
                    )
                })
                .collect();

            let output = match recipes {
                Ok(text @ RecipeText::Generated { .. }) => format!(
                    r#"<h2>📜 Your Personalized Recipe Collection</h2>
        <div class="recipe-content">
{}
        </div>
        <div class="notice success">🎉 Bon appétit! Your personalized recipes are ready to cook!</div>"#,
                    render_recipe_blocks(&classify_recipe_text(&text.display_text()))
                ),
                Ok(text @ RecipeText::Failed { .. }) => format!(
                    r#"<div class="notice error recipe-error">{}</div>"#,
                    escape_html(&text.display_text())
                ),
                Err(message) => format!(
                    r#"<div class="notice error recipe-error">{}</div>"#,
                    escape_html(message)
                ),
            };

            format!(
                r#"    <section class="selected-ingredients">
        <h3>🎯 Your Selected Ingredients ({count})</h3>
        <div class="ingredient-list">{tags}</div>
    </section>
    <section class="stats">
        <div class="stat-card"><h3>{total}</h3><p>Total Ingredients</p></div>
        <div class="stat-card"><h3>{ai}</h3><p>AI Detected</p></div>
        <div class="stat-card"><h3>{manual}</h3><p>Manually Added</p></div>
    </section>
    <section class="recipe-output">
        {output}
    </section>"#,
                count = selection.len(),
                total = stats.total,
                ai = stats.ai_detected,
                manual = stats.manually_added,
            )
        }
    }
}

pub fn render_recipe_blocks(blocks: &[RecipeBlock]) -> String {
    blocks
        .iter()
        .map(|block| match block {
            RecipeBlock::RecipeStart { index, title } => format!(
                "<div class=\"recipe-{index}\">\n<h3>{}</h3>",
                escape_html(title)
            ),
            RecipeBlock::RecipeEnd => "</div>".to_string(),
            RecipeBlock::Heading(text) => format!("<h4>{}</h4>", escape_html(text)),
            RecipeBlock::BulletListStart => "<ul>".to_string(),
            RecipeBlock::BulletListEnd => "</ul>".to_string(),
            RecipeBlock::NumberedListStart => "<ol>".to_string(),
            RecipeBlock::NumberedListEnd => "</ol>".to_string(),
            RecipeBlock::Bullet(text) | RecipeBlock::Step(text) => {
                format!("<li>{}</li>", escape_html(text))
            }
            RecipeBlock::Break => "<br>".to_string(),
            RecipeBlock::Paragraph(text) => format!("<p>{}</p>", escape_html(text)),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

const STYLE: &str = r#"
* { box-sizing: border-box; }
body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; margin: 0; background: #f7f7fb; color: #2d2d2d; line-height: 1.6; }
.container { max-width: 960px; margin: 0 auto; padding: 24px; }
.main-header { text-align: center; padding: 32px; border-radius: 16px; color: #fff; background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); margin-bottom: 24px; }
.section-card { background: #fff; border-radius: 12px; padding: 24px; margin-bottom: 24px; box-shadow: 0 2px 8px rgba(0,0,0,0.06); }
.step-indicator { display: inline-block; width: 32px; height: 32px; line-height: 32px; text-align: center; border-radius: 50%; background: #667eea; color: #fff; margin-right: 8px; }
.notice { padding: 12px 16px; border-radius: 8px; margin-top: 16px; }
.notice.success { background: #e6f6ec; color: #1e6b3a; }
.notice.info { background: #e8f0fe; color: #1a4d8f; }
.notice.error { background: #fdecea; color: #8a1c1c; white-space: pre-wrap; }
fieldset { border: 1px solid #e3e3ef; border-radius: 8px; margin-bottom: 12px; }
.ingredient-option { display: inline-block; margin: 4px 12px 4px 0; }
textarea, select { width: 100%; padding: 8px; border-radius: 8px; border: 1px solid #d0d0e0; font: inherit; }
button { margin-top: 12px; padding: 10px 20px; border: none; border-radius: 8px; background: #667eea; color: #fff; font-weight: 600; cursor: pointer; }
.ingredient-tag { display: inline-block; background: #eef0ff; color: #3b3f99; border-radius: 16px; padding: 4px 12px; margin: 4px; }
.stats { display: flex; gap: 16px; margin: 16px 0; }
.stat-card { flex: 1; background: #fff; border-radius: 12px; text-align: center; padding: 16px; box-shadow: 0 2px 8px rgba(0,0,0,0.06); }
.recipe-content .recipe-1, .recipe-content .recipe-2 { background: #fff; border-radius: 12px; padding: 16px 24px; margin-bottom: 16px; }
.recipe-content .recipe-1 { border-left: 6px solid #667eea; }
.recipe-content .recipe-2 { border-left: 6px solid #f5a623; }
.empty-state { text-align: center; padding: 32px; color: #666; }
.footer { text-align: center; color: #888; margin-top: 32px; }
"#;
