//! End to end form sessions, driven the way a user would.

use form::{
    FormSession, OrderForm, RecordingSink, Size, SubmitResult, ToppingId,
    render::HtmlRenderer,
};

fn session() -> FormSession<RecordingSink, HtmlRenderer> {
    FormSession::with_renderer(RecordingSink::default(), HtmlRenderer::default())
}

fn success_message(result: &SubmitResult) -> &str {
    match result {
        SubmitResult::Success { message } => message,
        other => panic!("expected success, got {other:?}"),
    }
}

#[test]
fn short_name_blocks_submit() {
    let mut session = session();
    session.change_full_name("Al");
    let state = session.change_size("M");

    assert_eq!(state.errors.full_name_error, "Full name must be at least 3 characters");
    assert!(!state.can_submit);
    assert!(session.renderer().markup.contains(r#"<input type="submit" disabled />"#));
}

#[test]
fn plain_order_succeeds_and_resets() {
    let mut session = session();
    session.change_full_name("Alice");
    session.change_size("M");
    assert!(session.state().can_submit);

    let state = session.submit();
    assert_eq!(
        success_message(&state.result),
        "Thank you for your order, Alice! Your medium pizza with no toppings is on the way."
    );
    assert_eq!(state.form, OrderForm::default());

    let payloads = &session.sink().payloads;
    assert_eq!(payloads.len(), 1);
    assert_eq!(payloads[0].full_name, "Alice");
    assert_eq!(payloads[0].size, Size::Medium);
    assert!(payloads[0].toppings.is_empty());
}

#[test]
fn single_topping_is_singular() {
    let mut session = session();
    session.change_full_name("Alice");
    session.change_size("M");
    session.toggle_topping(ToppingId(1), true);

    let state = session.submit();
    assert!(success_message(&state.result).contains("1 topping"));
    assert!(!success_message(&state.result).contains("1 toppings"));
}

#[test]
fn two_toppings_are_plural() {
    let mut session = session();
    session.change_full_name("Alice");
    session.change_size("M");
    session.toggle_topping(ToppingId(1), true);
    session.toggle_topping(ToppingId(3), true);

    let state = session.submit();
    assert!(success_message(&state.result).contains("2 toppings"));
    assert_eq!(session.sink().payloads[0].toppings, vec![ToppingId(1), ToppingId(3)]);
}

#[test]
fn empty_submit_fails_and_keeps_form() {
    let mut session = session();
    session.change_full_name("");
    session.change_size("");
    session.toggle_topping(ToppingId(4), true);

    let state = session.submit();
    assert_eq!(state.errors.full_name_error, "Full name must be at least 3 characters");
    assert_eq!(state.errors.size_error, "size must be S or M or L");
    assert_eq!(
        state.result,
        SubmitResult::Failure {
            message: "Something went wrong".to_string()
        }
    );
    assert!(state.form.selected_toppings.contains(&ToppingId(4)));
    assert!(session.sink().payloads.is_empty());

    let markup = &session.renderer().markup;
    assert!(markup.contains(r#"<div class="failure">Something went wrong</div>"#));
}

#[test]
fn form_stays_editable_after_failure() {
    let mut session = session();
    session.submit();
    session.change_full_name("Dana");
    let state = session.change_size("L");
    assert!(state.can_submit);

    let state = session.submit();
    assert!(success_message(&state.result).contains("large pizza"));
}
