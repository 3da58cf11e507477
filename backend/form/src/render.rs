//! # Rendering
//!
//! Server side markup for the shell and both views. Renderers observe the form
//! state after every reduced event.
//!
//! Labels and placeholders are fixed, UI tests match on them verbatim.

use crate::{
    nav::Route,
    state::{FormState, SubmitResult},
    toppings::catalog,
    validation::Size,
};

const SIZE_OPTIONS: [(Size, &str); 4] = [
    (Size::Unselected, "----Choose Size----"),
    (Size::Small, "Small (S)"),
    (Size::Medium, "Medium (M)"),
    (Size::Large, "Large (L)"),
];

pub trait Render {
    fn render(&mut self, state: &FormState);
}

impl Render for () {
    fn render(&mut self, _state: &FormState) {}
}

/// Keeps the markup of the last render.
#[derive(Debug, Default, Clone)]
pub struct HtmlRenderer {
    pub markup: String,
    pub renders: usize,
}

impl Render for HtmlRenderer {
    fn render(&mut self, state: &FormState) {
        self.markup = order_view(state);
        self.renders += 1;
    }
}

pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }

    out
}

pub fn shell(active: Route, body: &str) -> String {
    let links: String = Route::ALL
        .iter()
        .map(|route| {
            let class = if *route == active { r#" class="active""# } else { "" };
            format!(r#"<a href="{}"{class}>{}</a>"#, route.path(), route.label())
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Pizza</title>
</head>
<body>
<div id="app">
    <nav>{links}</nav>
{body}
</div>
</body>
</html>"#
    )
}

pub fn home_page() -> String {
    shell(Route::Home, "<h2>Welcome, hungry friend!</h2>")
}

pub fn order_page(state: &FormState) -> String {
    shell(Route::Order, &order_view(state))
}

pub fn order_view(state: &FormState) -> String {
    let banner = match &state.result {
        SubmitResult::Success { message } => {
            format!("<div class=\"success\">{}</div>\n", escape(message))
        }
        SubmitResult::Failure { message } => {
            format!("<div class=\"failure\">{}</div>\n", escape(message))
        }
        SubmitResult::Pending => String::new(),
    };

    let options: String = SIZE_OPTIONS
        .iter()
        .map(|&(size, label)| {
            let selected = if state.form.size == size { " selected" } else { "" };
            format!("<option value=\"{}\"{selected}>{label}</option>\n", size.code())
        })
        .collect();

    let checkboxes: String = catalog()
        .iter()
        .map(|topping| {
            let checked = if state.form.selected_toppings.contains(&topping.id) {
                " checked"
            } else {
                ""
            };
            format!(
                "<label><input type=\"checkbox\" name=\"toppings\" value=\"{}\"{checked} />{}<br /></label>\n",
                topping.id, topping.label
            )
        })
        .collect();

    let disabled = if state.can_submit { "" } else { " disabled" };

    format!(
        r#"<form id="order-form">
<h2>Order Your Pizza</h2>
{banner}<div class="input-group">
<label for="fullName">Full Name</label><br />
<input placeholder="Type full name" id="fullName" type="text" name="fullName" value="{name}" />
{name_error}</div>
<div class="input-group">
<label for="size">Size</label><br />
<select id="size" name="size">
{options}</select>
{size_error}</div>
<div class="input-group">
{checkboxes}</div>
<input type="submit"{disabled} />
</form>"#,
        name = escape(&state.form.full_name),
        name_error = error_div(&state.errors.full_name_error),
        size_error = error_div(&state.errors.size_error),
    )
}

fn error_div(error: &str) -> String {
    if error.is_empty() {
        String::new()
    } else {
        format!("<div class=\"error\">{}</div>\n", escape(error))
    }
}
