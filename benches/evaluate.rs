use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gatecheck::{translate, Context, Fulfillable, Item, Registry, User};
use serde_json::json;

/// Build a tree with `n` equality leaves under one AND node, against a
/// context where every leaf matches (worst case: no short-circuit).
fn build_wide_tree(n: usize) -> (Fulfillable, Context) {
    let registry = Registry::with_builtins();
    let children: Vec<serde_json::Value> = (0..n)
        .map(|_| json!({"type": "item_type", "value": "page"}))
        .collect();
    let tree = translate(&json!({"relation": "AND", "children": children}), &registry).unwrap();
    let ctx = Context::new().with_item(Item::new(1, "page"));
    (tree, ctx)
}

/// Build a tree nested `depth` collections deep with one leaf per level.
fn build_deep_tree(depth: usize) -> (Fulfillable, Context) {
    let registry = Registry::with_builtins();
    let mut spec = json!({"relation": "AND", "children": [
        {"type": "current_user_role", "value": "admin"},
    ]});
    for _ in 0..depth {
        spec = json!({"relation": "AND", "children": [
            {"type": "item_type", "value": "page"},
            spec,
        ]});
    }
    let tree = translate(&spec, &registry).unwrap();
    let ctx = Context::new()
        .with_item(Item::new(1, "page"))
        .with_current_user(User::new(9).with_role("admin"));
    (tree, ctx)
}

/// Context with a long ancestor chain, for the hierarchy-walk kind.
fn build_level_tree(chain: i64) -> (Fulfillable, Context) {
    let registry = Registry::with_builtins();
    let tree = translate(
        &json!({"relation": "AND", "children": [
            {"type": "item_level", "value": chain, "compare": ">="},
        ]}),
        &registry,
    )
    .unwrap();

    let mut ctx = Context::new().with_item(Item::new(chain, "page").with_parent(chain - 1));
    for id in 1..chain {
        let mut ancestor = Item::new(id, "page");
        if id > 1 {
            ancestor = ancestor.with_parent(id - 1);
        }
        ctx = ctx.with_ancestor_item(ancestor);
    }
    (tree, ctx)
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for &n in &[5, 20, 50] {
        let (tree, ctx) = build_wide_tree(n);
        group.bench_function(&format!("{n}_wide"), |b| {
            b.iter(|| tree.is_fulfilled(black_box(&ctx)));
        });
    }

    for &depth in &[4, 16] {
        let (tree, ctx) = build_deep_tree(depth);
        group.bench_function(&format!("{depth}_deep"), |b| {
            b.iter(|| tree.is_fulfilled(black_box(&ctx)));
        });
    }

    let (tree, ctx) = build_level_tree(32);
    group.bench_function("32_ancestor_walk", |b| {
        b.iter(|| tree.is_fulfilled(black_box(&ctx)));
    });

    group.finish();
}

fn bench_translate(c: &mut Criterion) {
    let registry = Registry::with_builtins();
    let children: Vec<serde_json::Value> = (0..20)
        .map(|i| json!({"type": "item_id", "value": i}))
        .collect();
    let spec = json!({"relation": "OR", "children": children});

    c.bench_function("translate_20_leaves", |b| {
        b.iter(|| translate(black_box(&spec), &registry).unwrap());
    });
}

criterion_group!(benches, bench_evaluate, bench_translate);
criterion_main!(benches);
