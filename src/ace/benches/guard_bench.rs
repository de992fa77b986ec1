//! Guard hot-path benchmarks
//!
//! Measures the three decision shapes that dominate production traffic:
//! admin bypass (zero lookups), member self-check (zero or one lookup),
//! and the staff org chain (two lookups).

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;
use tokio::runtime::Runtime;

use carelink_ace::{
    AceConfig, AceGuard, AceStrategy, HandlerMeta, HandlerRegistry, InMemoryEntityResolver,
    RequestContext, MEMBER_ENTITY_NAME,
};
use carelink_core::types::{Caller, EntityProjection, Role};

const MEMBER_1: &str = "5f8d0d55b54764421b715c01";

fn build_guard(rt: &Runtime) -> AceGuard {
    let registry = HandlerRegistry::new()
        .with_handler(
            "getMember",
            HandlerMeta::new().with_ace(
                AceConfig::new(AceStrategy::ByMember, MEMBER_ENTITY_NAME)
                    .with_id_locator("memberId"),
            ),
        )
        .with_handler(
            "updateJourney",
            HandlerMeta::new().with_ace(
                AceConfig::new(AceStrategy::ByMember, "Journey").with_id_locator("journeyId"),
            ),
        );

    let resolver = InMemoryEntityResolver::new();
    rt.block_on(async {
        resolver
            .insert(
                MEMBER_ENTITY_NAME,
                EntityProjection::new(MEMBER_1).with_org("org-x"),
            )
            .await;
        resolver
            .insert(
                "Journey",
                EntityProjection::new("j1").with_member_id(MEMBER_1),
            )
            .await;
    });

    AceGuard::new(Arc::new(registry), Arc::new(resolver))
}

fn bench_guard_decisions(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let guard = build_guard(&rt);

    let mut group = c.benchmark_group("guard_decisions");

    group.bench_function("admin_bypass", |b| {
        b.to_async(&rt).iter(|| async {
            let caller = Caller::new("admin-1").with_role(Role::Admin);
            let mut ctx = RequestContext::new(caller, "getMember")
                .with_args(json!({ "memberId": MEMBER_1 }));
            black_box(guard.can_activate(&mut ctx).await)
        });
    });

    group.bench_function("member_self", |b| {
        b.to_async(&rt).iter(|| async {
            let caller = Caller::new(MEMBER_1).with_role(Role::Member);
            let mut ctx = RequestContext::new(caller, "getMember")
                .with_args(json!({ "memberId": MEMBER_1 }));
            black_box(guard.can_activate(&mut ctx).await)
        });
    });

    group.bench_function("staff_org_chain", |b| {
        b.to_async(&rt).iter(|| async {
            let caller = Caller::new("staff-1").with_role(Role::Coach).with_org("org-x");
            let mut ctx = RequestContext::new(caller, "updateJourney")
                .with_args(json!({ "journeyId": "j1" }));
            black_box(guard.can_activate(&mut ctx).await)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_guard_decisions);
criterion_main!(benches);
