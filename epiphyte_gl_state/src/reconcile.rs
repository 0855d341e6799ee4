// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

use crate::parameters::{BlendEquation, BlendFactor, GlParameter, GlValue};
use crate::snapshot::{GlContext, GlStateSnapshot};
use crate::trace::DriftSink;

/// Entries applied by [`DrawParameters`], inline-sized to the full set.
type ParameterEntries = SmallVec<[(GlParameter, GlValue); 12]>;

/// The clean-room parameter set applied around an overlay draw.
///
/// An overlay compositing onto an already-drawn frame needs depth writes and
/// testing on, premultiplied-alpha blending, and the default framebuffer
/// bound for both draw and read, whatever the host left behind. The
/// `Default` value is that contract; deviating fields are for tests and
/// unusual embeddings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawParameters {
    /// Enable depth buffer writes.
    pub depth_mask: bool,
    /// Enable depth testing.
    pub depth_test: bool,
    /// Enable blending.
    pub blend: bool,
    /// RGB source blend factor.
    pub blend_src_rgb: BlendFactor,
    /// RGB destination blend factor.
    pub blend_dst_rgb: BlendFactor,
    /// Alpha source blend factor.
    pub blend_src_alpha: BlendFactor,
    /// Alpha destination blend factor.
    pub blend_dst_alpha: BlendFactor,
    /// Blend equation for both RGB and alpha.
    pub blend_equation: BlendEquation,
    /// Bind the default framebuffer for draw and read.
    pub unbind_framebuffers: bool,
}

impl Default for DrawParameters {
    fn default() -> Self {
        Self {
            depth_mask: true,
            depth_test: true,
            blend: true,
            blend_src_rgb: BlendFactor::SrcAlpha,
            blend_dst_rgb: BlendFactor::OneMinusSrcAlpha,
            blend_src_alpha: BlendFactor::One,
            blend_dst_alpha: BlendFactor::OneMinusSrcAlpha,
            blend_equation: BlendEquation::Add,
            unbind_framebuffers: true,
        }
    }
}

impl DrawParameters {
    /// The `(key, value)` pairs this set writes, in application order.
    #[must_use]
    pub fn entries(&self) -> ParameterEntries {
        let mut entries = ParameterEntries::new();
        entries.push((GlParameter::DepthWritemask, GlValue::Toggle(self.depth_mask)));
        entries.push((GlParameter::DepthTest, GlValue::Toggle(self.depth_test)));
        entries.push((GlParameter::Blend, GlValue::Toggle(self.blend)));
        entries.push((GlParameter::BlendSrcRgb, GlValue::Factor(self.blend_src_rgb)));
        entries.push((GlParameter::BlendDstRgb, GlValue::Factor(self.blend_dst_rgb)));
        entries.push((
            GlParameter::BlendSrcAlpha,
            GlValue::Factor(self.blend_src_alpha),
        ));
        entries.push((
            GlParameter::BlendDstAlpha,
            GlValue::Factor(self.blend_dst_alpha),
        ));
        entries.push((
            GlParameter::BlendEquationRgb,
            GlValue::Equation(self.blend_equation),
        ));
        entries.push((
            GlParameter::BlendEquationAlpha,
            GlValue::Equation(self.blend_equation),
        ));
        if self.unbind_framebuffers {
            entries.push((GlParameter::DrawFramebufferBinding, GlValue::Framebuffer(None)));
            entries.push((GlParameter::ReadFramebufferBinding, GlValue::Framebuffer(None)));
        }
        entries
    }

    /// Writes every entry of this set into `gl`.
    pub fn apply<G: GlContext + ?Sized>(&self, gl: &mut G) {
        for (parameter, value) in self.entries() {
            gl.set(parameter, value);
        }
    }
}

/// One diagnostic row: the four observed values of a parameter across a
/// reconciled draw.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DriftRow {
    /// The parameter the row describes.
    pub parameter: GlParameter,
    /// Value before anything was touched.
    pub old: GlValue,
    /// Value after the clean-room set was applied, before the draw.
    pub pre: GlValue,
    /// Value after the draw returned.
    pub post: GlValue,
    /// Value after restoration, as handed back to the host.
    pub reset: GlValue,
}

/// The four snapshots taken around one reconciled draw.
///
/// `old` → apply clean-room set → `pre` → draw → `post` → restore → `reset`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameReport {
    /// State inherited from the host before the draw.
    pub old: GlStateSnapshot,
    /// State the draw actually ran against.
    pub pre: GlStateSnapshot,
    /// State the draw left behind.
    pub post: GlStateSnapshot,
    /// State handed back to the host.
    pub reset: GlStateSnapshot,
}

impl FrameReport {
    /// Keys whose four observations are not all equal.
    ///
    /// This includes the expected differences from applying the clean-room
    /// set; it is the full diagnostic picture, not a leak verdict. For the
    /// verdict, see [`Self::leaked`].
    pub fn drifted(&self) -> impl Iterator<Item = GlParameter> + '_ {
        GlParameter::ALL.into_iter().filter(move |&parameter| {
            let row = self.row(parameter);
            !(row.old == row.pre && row.pre == row.post && row.post == row.reset)
        })
    }

    /// Keys whose value handed back to the host differs from the inherited
    /// one. Non-empty means the host observes state it did not set.
    pub fn leaked(&self) -> impl Iterator<Item = GlParameter> + '_ {
        self.old.diff(&self.reset)
    }

    /// The four observations for `parameter` as one row.
    #[must_use]
    pub fn row(&self, parameter: GlParameter) -> DriftRow {
        DriftRow {
            parameter,
            old: self.old.get(parameter),
            pre: self.pre.get(parameter),
            post: self.post.get(parameter),
            reset: self.reset.get(parameter),
        }
    }
}

/// Runs `draw` against `gl` inside the clean-room parameter scope.
///
/// Every key written by `parameters` is restored to its prior value before
/// this returns, so the host gets back exactly the state it handed over for
/// those keys. Keys the draw mutates *outside* the applied set are not
/// restored; they surface through [`FrameReport::leaked`] instead, because
/// silently resetting state a renderer set deliberately is worse than
/// reporting it.
///
/// This never fails and never panics on any context state; a drifting
/// context still draws.
pub fn reconcile<G, F>(gl: &mut G, parameters: &DrawParameters, draw: F) -> FrameReport
where
    G: GlContext + ?Sized,
    F: FnOnce(&mut G),
{
    let old = GlStateSnapshot::capture(gl);

    let entries = parameters.entries();
    let saved: ParameterEntries = entries
        .iter()
        .map(|&(parameter, _)| (parameter, gl.get(parameter)))
        .collect();

    for &(parameter, value) in &entries {
        gl.set(parameter, value);
    }
    let pre = GlStateSnapshot::capture(gl);

    draw(gl);
    let post = GlStateSnapshot::capture(gl);

    for &(parameter, value) in &saved {
        gl.set(parameter, value);
    }
    let reset = GlStateSnapshot::capture(gl);

    FrameReport {
        old,
        pre,
        post,
        reset,
    }
}

/// Like [`reconcile`], additionally reporting every drifting key to `sink`.
///
/// The sink sees one [`DriftRow`] per key from [`FrameReport::drifted`], in
/// snapshot order. Sinks observe; they cannot alter the draw or the
/// restoration.
pub fn reconcile_with_trace<G, F, T>(
    gl: &mut G,
    parameters: &DrawParameters,
    draw: F,
    sink: &mut T,
) -> FrameReport
where
    G: GlContext + ?Sized,
    F: FnOnce(&mut G),
    T: DriftSink + ?Sized,
{
    let report = reconcile(gl, parameters, draw);
    for parameter in report.drifted() {
        sink.drift(&report.row(parameter));
    }
    report
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use super::{DrawParameters, FrameReport, reconcile, reconcile_with_trace};
    use crate::parameters::{
        BlendEquation, BlendFactor, CompareFunc, FramebufferId, GlParameter, GlValue,
    };
    use crate::snapshot::{GlContext, GlStateSnapshot};
    use crate::trace::DriftTable;

    /// Context fixture with host-typical inherited state: no blending,
    /// depth off, a framebuffer left bound.
    struct FixtureGl {
        values: [GlValue; GlParameter::ALL.len()],
    }

    impl FixtureGl {
        fn host_state() -> Self {
            let mut values = [GlValue::Toggle(false); GlParameter::ALL.len()];
            values[GlParameter::BlendSrcRgb.index()] = GlValue::Factor(BlendFactor::One);
            values[GlParameter::BlendDstRgb.index()] = GlValue::Factor(BlendFactor::Zero);
            values[GlParameter::BlendSrcAlpha.index()] = GlValue::Factor(BlendFactor::One);
            values[GlParameter::BlendDstAlpha.index()] = GlValue::Factor(BlendFactor::Zero);
            values[GlParameter::BlendEquationRgb.index()] = GlValue::Equation(BlendEquation::Add);
            values[GlParameter::BlendEquationAlpha.index()] = GlValue::Equation(BlendEquation::Add);
            values[GlParameter::DepthFunc.index()] = GlValue::Compare(CompareFunc::Less);
            values[GlParameter::DrawFramebufferBinding.index()] =
                GlValue::Framebuffer(Some(FramebufferId(3)));
            values[GlParameter::ReadFramebufferBinding.index()] =
                GlValue::Framebuffer(Some(FramebufferId(3)));
            Self { values }
        }
    }

    impl GlContext for FixtureGl {
        fn get(&self, parameter: GlParameter) -> GlValue {
            self.values[parameter.index()]
        }

        fn set(&mut self, parameter: GlParameter, value: GlValue) {
            self.values[parameter.index()] = value;
        }
    }

    #[test]
    fn default_parameters_express_the_overlay_contract() {
        let params = DrawParameters::default();
        assert!(params.depth_mask);
        assert!(params.depth_test);
        assert!(params.blend);
        assert_eq!(params.blend_src_rgb, BlendFactor::SrcAlpha);
        assert_eq!(params.blend_dst_rgb, BlendFactor::OneMinusSrcAlpha);
        assert_eq!(params.blend_src_alpha, BlendFactor::One);
        assert_eq!(params.blend_dst_alpha, BlendFactor::OneMinusSrcAlpha);
        assert_eq!(params.blend_equation, BlendEquation::Add);
        assert!(params.unbind_framebuffers);
        assert_eq!(params.entries().len(), 11);
    }

    #[test]
    fn draw_runs_against_the_clean_room_state() {
        let mut gl = FixtureGl::host_state();
        let mut observed: Option<GlStateSnapshot> = None;

        reconcile(&mut gl, &DrawParameters::default(), |gl| {
            observed = Some(GlStateSnapshot::capture(gl));
        });

        let observed = observed.unwrap();
        assert_eq!(observed.get(GlParameter::Blend), GlValue::Toggle(true));
        assert_eq!(observed.get(GlParameter::DepthTest), GlValue::Toggle(true));
        assert_eq!(
            observed.get(GlParameter::BlendSrcRgb),
            GlValue::Factor(BlendFactor::SrcAlpha)
        );
        assert_eq!(
            observed.get(GlParameter::DrawFramebufferBinding),
            GlValue::Framebuffer(None)
        );
    }

    #[test]
    fn applied_keys_are_restored_even_when_the_draw_mutates_them() {
        let mut gl = FixtureGl::host_state();

        let report = reconcile(&mut gl, &DrawParameters::default(), |gl| {
            gl.set(GlParameter::Blend, GlValue::Toggle(false));
            gl.set(
                GlParameter::BlendSrcRgb,
                GlValue::Factor(BlendFactor::DstColor),
            );
            gl.set(
                GlParameter::DrawFramebufferBinding,
                GlValue::Framebuffer(Some(FramebufferId(9))),
            );
        });

        // Handed back exactly what was inherited.
        assert_eq!(gl.get(GlParameter::Blend), GlValue::Toggle(false));
        assert_eq!(
            gl.get(GlParameter::BlendSrcRgb),
            GlValue::Factor(BlendFactor::One)
        );
        assert_eq!(
            gl.get(GlParameter::DrawFramebufferBinding),
            GlValue::Framebuffer(Some(FramebufferId(3)))
        );
        assert_eq!(report.leaked().count(), 0);
    }

    #[test]
    fn framebuffer_bindings_match_pre_call_values_after_any_wrapped_mutation() {
        let mut gl = FixtureGl::host_state();
        let inherited_draw = gl.get(GlParameter::DrawFramebufferBinding);
        let inherited_read = gl.get(GlParameter::ReadFramebufferBinding);

        reconcile(&mut gl, &DrawParameters::default(), |gl| {
            for id in [7, 11, 13] {
                gl.set(
                    GlParameter::DrawFramebufferBinding,
                    GlValue::Framebuffer(Some(FramebufferId(id))),
                );
                gl.set(
                    GlParameter::ReadFramebufferBinding,
                    GlValue::Framebuffer(Some(FramebufferId(id))),
                );
            }
        });

        assert_eq!(gl.get(GlParameter::DrawFramebufferBinding), inherited_draw);
        assert_eq!(gl.get(GlParameter::ReadFramebufferBinding), inherited_read);
    }

    #[test]
    fn unapplied_keys_mutated_by_the_draw_surface_as_leaks() {
        let mut gl = FixtureGl::host_state();

        let report = reconcile(&mut gl, &DrawParameters::default(), |gl| {
            gl.set(GlParameter::ScissorTest, GlValue::Toggle(true));
            gl.set(GlParameter::DepthFunc, GlValue::Compare(CompareFunc::Always));
        });

        let leaked: Vec<_> = report.leaked().collect();
        assert_eq!(leaked, [GlParameter::DepthFunc, GlParameter::ScissorTest]);
        // The mutated values are what the host now sees; nothing silently
        // reset them.
        assert_eq!(gl.get(GlParameter::ScissorTest), GlValue::Toggle(true));
    }

    #[test]
    fn clean_draw_produces_no_leaks_but_documents_applied_differences() {
        let mut gl = FixtureGl::host_state();

        let report = reconcile(&mut gl, &DrawParameters::default(), |_| {});

        assert_eq!(report.leaked().count(), 0);
        // Blend went false -> true -> true -> false, so it drifts.
        let drifted: Vec<_> = report.drifted().collect();
        assert!(drifted.contains(&GlParameter::Blend));
        assert!(!drifted.contains(&GlParameter::ScissorTest));
    }

    #[test]
    fn trace_receives_one_row_per_drifting_key() {
        let mut gl = FixtureGl::host_state();
        let mut table = DriftTable::new();

        let report = reconcile_with_trace(
            &mut gl,
            &DrawParameters::default(),
            |gl| {
                gl.set(GlParameter::CullFace, GlValue::Toggle(true));
            },
            &mut table,
        );

        assert_eq!(table.rows().len(), report.drifted().count());
        let cull = table
            .rows()
            .iter()
            .find(|row| row.parameter == GlParameter::CullFace)
            .unwrap();
        assert_eq!(cull.old, GlValue::Toggle(false));
        assert_eq!(cull.post, GlValue::Toggle(true));
        assert_eq!(cull.reset, GlValue::Toggle(true));
    }

    #[test]
    fn report_rows_read_back_their_snapshots() {
        let mut gl = FixtureGl::host_state();
        let report: FrameReport = reconcile(&mut gl, &DrawParameters::default(), |_| {});
        let row = report.row(GlParameter::DepthTest);
        assert_eq!(row.old, GlValue::Toggle(false));
        assert_eq!(row.pre, GlValue::Toggle(true));
        assert_eq!(row.post, GlValue::Toggle(true));
        assert_eq!(row.reset, GlValue::Toggle(false));
    }
}
