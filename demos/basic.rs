use gatecheck::{translate_str, Context, Item, Registry, User};

fn main() {
    let registry = Registry::with_builtins();

    // Show the "layout settings" container only on top-level pages, and
    // only to admins or users who can edit layouts.
    let rules = translate_str(
        r#"{
            "relation": "AND",
            "children": [
                {"type": "item_type", "value": "page"},
                {"type": "item_level", "value": 2, "compare": "<"},
                {
                    "relation": "OR",
                    "children": [
                        {"type": "current_user_role", "value": "admin"},
                        {"type": "current_user_capability", "value": "edit_layouts"}
                    ]
                }
            ]
        }"#,
        &registry,
    )
    .expect("failed to translate rule specification");

    println!("{rules}");

    let ctx = Context::new()
        .with_item(Item::new(42, "page"))
        .with_current_user(User::new(7).with_role("admin"));

    if rules.is_fulfilled(&ctx) {
        println!("container is active");
    } else {
        println!("container is hidden");
    }
}
