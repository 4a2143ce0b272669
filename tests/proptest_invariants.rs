use gatecheck::{translate, Context, Item, Registry, User};
use proptest::prelude::*;
use serde_json::json;

/// Kinds whose default-equality leaves translate for any scalar value.
fn arb_kind() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("boolean"),
        Just("item_id"),
        Just("item_type"),
        Just("item_level"),
        Just("item_term"),
        Just("current_user_id"),
        Just("current_user_role"),
    ]
}

fn arb_expected() -> impl Strategy<Value = serde_json::Value> {
    prop_oneof![
        any::<i64>().prop_map(|i| json!(i)),
        any::<bool>().prop_map(|b| json!(b)),
        "[a-z]{1,6}".prop_map(|s| json!(s)),
    ]
}

fn arb_leaf() -> impl Strategy<Value = serde_json::Value> {
    (arb_kind(), arb_expected()).prop_map(|(kind, value)| json!({"type": kind, "value": value}))
}

/// An explicit-node specification of bounded depth. Always a collection at
/// the top, since bare leaves are not legal top-level specifications.
fn arb_collection() -> impl Strategy<Value = serde_json::Value> {
    let node = arb_leaf().prop_recursive(3, 12, 4, |inner| {
        (
            prop_oneof![Just("AND"), Just("OR")],
            any::<bool>(),
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(relation, not, children)| {
                json!({"relation": relation, "not": not, "children": children})
            })
    });
    (
        prop_oneof![Just("AND"), Just("OR")],
        prop::collection::vec(node, 0..4),
    )
        .prop_map(|(relation, children)| json!({"relation": relation, "children": children}))
}

fn arb_context() -> impl Strategy<Value = Context> {
    (
        prop::option::of((0..5_i64, prop_oneof![Just("page"), Just("article")])),
        prop::option::of((0..5_i64, prop::collection::vec("[a-z]{1,6}", 0..3))),
    )
        .prop_map(|(item, current_user)| {
            let mut ctx = Context::new();
            if let Some((id, kind)) = item {
                ctx = ctx.with_item(Item::new(id, kind).with_terms("category", ["news"]));
            }
            if let Some((id, roles)) = current_user {
                let mut user = User::new(id);
                for role in roles {
                    user = user.with_role(role);
                }
                ctx = ctx.with_current_user(user);
            }
            ctx
        })
}

proptest! {
    /// Any generated specification translates, and evaluating the tree
    /// never panics for any context.
    #[test]
    fn translated_trees_never_panic(spec in arb_collection(), ctx in arb_context()) {
        let registry = Registry::with_builtins();
        let tree = translate(&spec, &registry).unwrap();
        let _ = tree.is_fulfilled(&ctx);
    }

    /// Adding `not` to the top-level node inverts the result, for every
    /// tree and every context.
    #[test]
    fn negation_flips_the_result(spec in arb_collection(), ctx in arb_context()) {
        let registry = Registry::with_builtins();

        let mut negated = spec.clone();
        negated
            .as_object_mut()
            .unwrap()
            .insert("not".to_owned(), json!(true));

        let plain = translate(&spec, &registry).unwrap();
        let flipped = translate(&negated, &registry).unwrap();
        prop_assert_ne!(plain.is_fulfilled(&ctx), flipped.is_fulfilled(&ctx));
    }

    /// The flat-map shorthand and its explicit expansion agree on every
    /// context.
    #[test]
    fn flat_map_matches_explicit_expansion(
        entries in prop::collection::btree_map(arb_kind(), arb_expected(), 0..4),
        ctx in arb_context(),
    ) {
        let registry = Registry::with_builtins();

        let flat: serde_json::Value = entries
            .iter()
            .map(|(kind, value)| ((*kind).to_owned(), value.clone()))
            .collect::<serde_json::Map<String, serde_json::Value>>()
            .into();
        let children: Vec<serde_json::Value> = entries
            .iter()
            .map(|(kind, value)| json!({"type": kind, "value": value}))
            .collect();
        let explicit = json!({"relation": "AND", "children": children});

        let flat_tree = translate(&flat, &registry).unwrap();
        let explicit_tree = translate(&explicit, &registry).unwrap();
        prop_assert_eq!(
            flat_tree.is_fulfilled(&ctx),
            explicit_tree.is_fulfilled(&ctx)
        );
    }

    /// Double negation restores the original result.
    #[test]
    fn double_negation_is_identity(spec in arb_collection(), ctx in arb_context()) {
        let registry = Registry::with_builtins();
        let wrapped = json!({
            "relation": "AND",
            "not": true,
            "children": [{
                "relation": "AND",
                "not": true,
                "children": [spec.clone()],
            }],
        });
        let plain = translate(&spec, &registry).unwrap();
        let doubled = translate(&wrapped, &registry).unwrap();
        prop_assert_eq!(plain.is_fulfilled(&ctx), doubled.is_fulfilled(&ctx));
    }
}
