// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use epiphyte_gl_state::{
    BlendEquation, BlendFactor, CompareFunc, DrawParameters, FramebufferId, GlContext,
    GlParameter, GlStateSnapshot, GlValue, reconcile,
};

/// Flat-array context, so get/set cost is close to a cached native binding
/// and the numbers reflect the reconciliation machinery itself.
struct BenchGl {
    values: [GlValue; GlParameter::ALL.len()],
}

impl BenchGl {
    /// Host-typical inherited state: no blending, depth off, a framebuffer
    /// left bound.
    fn host_state() -> Self {
        let mut values = [GlValue::Toggle(false); GlParameter::ALL.len()];
        values[GlParameter::BlendSrcRgb as usize] = GlValue::Factor(BlendFactor::One);
        values[GlParameter::BlendDstRgb as usize] = GlValue::Factor(BlendFactor::Zero);
        values[GlParameter::BlendSrcAlpha as usize] = GlValue::Factor(BlendFactor::One);
        values[GlParameter::BlendDstAlpha as usize] = GlValue::Factor(BlendFactor::Zero);
        values[GlParameter::BlendEquationRgb as usize] = GlValue::Equation(BlendEquation::Add);
        values[GlParameter::BlendEquationAlpha as usize] = GlValue::Equation(BlendEquation::Add);
        values[GlParameter::DepthFunc as usize] = GlValue::Compare(CompareFunc::Less);
        values[GlParameter::DrawFramebufferBinding as usize] =
            GlValue::Framebuffer(Some(FramebufferId(3)));
        values[GlParameter::ReadFramebufferBinding as usize] =
            GlValue::Framebuffer(Some(FramebufferId(3)));
        Self { values }
    }
}

impl GlContext for BenchGl {
    fn get(&self, parameter: GlParameter) -> GlValue {
        self.values[parameter as usize]
    }

    fn set(&mut self, parameter: GlParameter, value: GlValue) {
        self.values[parameter as usize] = value;
    }
}

fn bench_gl_reconcile(c: &mut Criterion) {
    let mut group = c.benchmark_group("gl_state");
    let parameters = DrawParameters::default();

    group.bench_function("snapshot_capture", |b| {
        let gl = BenchGl::host_state();
        b.iter(|| black_box(GlStateSnapshot::capture(black_box(&gl))));
    });

    group.bench_function("snapshot_diff_equal", |b| {
        let gl = BenchGl::host_state();
        let before = GlStateSnapshot::capture(&gl);
        let after = GlStateSnapshot::capture(&gl);
        b.iter(|| black_box(before.diff(&after).count()));
    });

    // The whole per-frame envelope around a draw that touches nothing.
    group.bench_function("reconcile_clean_draw", |b| {
        let mut gl = BenchGl::host_state();
        b.iter(|| black_box(reconcile(&mut gl, &parameters, |_| {})));
    });

    // A draw that mutates one applied key and leaks one outside key, plus
    // the leak verdict, batched so every iteration starts from host state.
    group.bench_function("reconcile_drifting_draw", |b| {
        b.iter_batched(
            BenchGl::host_state,
            |mut gl| {
                let report = reconcile(&mut gl, &parameters, |gl| {
                    gl.set(GlParameter::Blend, GlValue::Toggle(false));
                    gl.set(GlParameter::DepthFunc, GlValue::Compare(CompareFunc::Always));
                });
                black_box(report.leaked().count());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_gl_reconcile);
criterion_main!(benches);
