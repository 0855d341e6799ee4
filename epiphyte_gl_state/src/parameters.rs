// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Names and values for the reconciled GL parameter set.
//!
//! Everything here is plain data. The numeric constants are the GL enum
//! values; the symbolic names are resolved through `match` tables that the
//! compiler builds once, so rendering a diagnostic row never constructs a
//! lookup structure at runtime.

use core::fmt;

bitflags::bitflags! {
    /// GL clear-buffer bits for a redraw request.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ClearMask: u32 {
        /// Depth buffer (`GL_DEPTH_BUFFER_BIT`).
        const DEPTH = 0x0000_0100;
        /// Stencil buffer (`GL_STENCIL_BUFFER_BIT`).
        const STENCIL = 0x0000_0400;
        /// Color buffer (`GL_COLOR_BUFFER_BIT`).
        const COLOR = 0x0000_4000;
    }
}

/// Identifier for a framebuffer object.
///
/// A small, opaque handle owned by whichever side of the context created
/// it. The *default* framebuffer has no id; bindings represent it as
/// `None`.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FramebufferId(pub u32);

/// Blend function factor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BlendFactor {
    /// `GL_ZERO`.
    Zero,
    /// `GL_ONE`.
    One,
    /// `GL_SRC_COLOR`.
    SrcColor,
    /// `GL_ONE_MINUS_SRC_COLOR`.
    OneMinusSrcColor,
    /// `GL_SRC_ALPHA`.
    SrcAlpha,
    /// `GL_ONE_MINUS_SRC_ALPHA`.
    OneMinusSrcAlpha,
    /// `GL_DST_ALPHA`.
    DstAlpha,
    /// `GL_ONE_MINUS_DST_ALPHA`.
    OneMinusDstAlpha,
    /// `GL_DST_COLOR`.
    DstColor,
    /// `GL_ONE_MINUS_DST_COLOR`.
    OneMinusDstColor,
}

impl BlendFactor {
    /// The GL enum value.
    #[inline]
    #[must_use]
    pub const fn gl_enum(self) -> u32 {
        match self {
            Self::Zero => 0x0000,
            Self::One => 0x0001,
            Self::SrcColor => 0x0300,
            Self::OneMinusSrcColor => 0x0301,
            Self::SrcAlpha => 0x0302,
            Self::OneMinusSrcAlpha => 0x0303,
            Self::DstAlpha => 0x0304,
            Self::OneMinusDstAlpha => 0x0305,
            Self::DstColor => 0x0306,
            Self::OneMinusDstColor => 0x0307,
        }
    }

    /// The symbolic GL name, without the `GL_` prefix.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zero => "ZERO",
            Self::One => "ONE",
            Self::SrcColor => "SRC_COLOR",
            Self::OneMinusSrcColor => "ONE_MINUS_SRC_COLOR",
            Self::SrcAlpha => "SRC_ALPHA",
            Self::OneMinusSrcAlpha => "ONE_MINUS_SRC_ALPHA",
            Self::DstAlpha => "DST_ALPHA",
            Self::OneMinusDstAlpha => "ONE_MINUS_DST_ALPHA",
            Self::DstColor => "DST_COLOR",
            Self::OneMinusDstColor => "ONE_MINUS_DST_COLOR",
        }
    }

    /// Looks up a factor from its GL enum value.
    #[must_use]
    pub const fn from_gl_enum(value: u32) -> Option<Self> {
        match value {
            0x0000 => Some(Self::Zero),
            0x0001 => Some(Self::One),
            0x0300 => Some(Self::SrcColor),
            0x0301 => Some(Self::OneMinusSrcColor),
            0x0302 => Some(Self::SrcAlpha),
            0x0303 => Some(Self::OneMinusSrcAlpha),
            0x0304 => Some(Self::DstAlpha),
            0x0305 => Some(Self::OneMinusDstAlpha),
            0x0306 => Some(Self::DstColor),
            0x0307 => Some(Self::OneMinusDstColor),
            _ => None,
        }
    }
}

/// Blend equation mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BlendEquation {
    /// `GL_FUNC_ADD`.
    Add,
    /// `GL_MIN`.
    Min,
    /// `GL_MAX`.
    Max,
    /// `GL_FUNC_SUBTRACT`.
    Subtract,
    /// `GL_FUNC_REVERSE_SUBTRACT`.
    ReverseSubtract,
}

impl BlendEquation {
    /// The GL enum value.
    #[inline]
    #[must_use]
    pub const fn gl_enum(self) -> u32 {
        match self {
            Self::Add => 0x8006,
            Self::Min => 0x8007,
            Self::Max => 0x8008,
            Self::Subtract => 0x800A,
            Self::ReverseSubtract => 0x800B,
        }
    }

    /// The symbolic GL name, without the `GL_` prefix.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "FUNC_ADD",
            Self::Min => "MIN",
            Self::Max => "MAX",
            Self::Subtract => "FUNC_SUBTRACT",
            Self::ReverseSubtract => "FUNC_REVERSE_SUBTRACT",
        }
    }

    /// Looks up an equation from its GL enum value.
    #[must_use]
    pub const fn from_gl_enum(value: u32) -> Option<Self> {
        match value {
            0x8006 => Some(Self::Add),
            0x8007 => Some(Self::Min),
            0x8008 => Some(Self::Max),
            0x800A => Some(Self::Subtract),
            0x800B => Some(Self::ReverseSubtract),
            _ => None,
        }
    }
}

/// Depth comparison function.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CompareFunc {
    /// `GL_NEVER`.
    Never,
    /// `GL_LESS`.
    Less,
    /// `GL_EQUAL`.
    Equal,
    /// `GL_LEQUAL`.
    Lequal,
    /// `GL_GREATER`.
    Greater,
    /// `GL_NOTEQUAL`.
    Notequal,
    /// `GL_GEQUAL`.
    Gequal,
    /// `GL_ALWAYS`.
    Always,
}

impl CompareFunc {
    /// The GL enum value.
    #[inline]
    #[must_use]
    pub const fn gl_enum(self) -> u32 {
        match self {
            Self::Never => 0x0200,
            Self::Less => 0x0201,
            Self::Equal => 0x0202,
            Self::Lequal => 0x0203,
            Self::Greater => 0x0204,
            Self::Notequal => 0x0205,
            Self::Gequal => 0x0206,
            Self::Always => 0x0207,
        }
    }

    /// The symbolic GL name, without the `GL_` prefix.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Never => "NEVER",
            Self::Less => "LESS",
            Self::Equal => "EQUAL",
            Self::Lequal => "LEQUAL",
            Self::Greater => "GREATER",
            Self::Notequal => "NOTEQUAL",
            Self::Gequal => "GEQUAL",
            Self::Always => "ALWAYS",
        }
    }

    /// Looks up a comparison function from its GL enum value.
    #[must_use]
    pub const fn from_gl_enum(value: u32) -> Option<Self> {
        match value {
            0x0200 => Some(Self::Never),
            0x0201 => Some(Self::Less),
            0x0202 => Some(Self::Equal),
            0x0203 => Some(Self::Lequal),
            0x0204 => Some(Self::Greater),
            0x0205 => Some(Self::Notequal),
            0x0206 => Some(Self::Gequal),
            0x0207 => Some(Self::Always),
            _ => None,
        }
    }
}

/// A state key in the reconciled parameter set.
///
/// This is the full set of keys captured by a
/// [`GlStateSnapshot`](crate::GlStateSnapshot): the keys the clean-room
/// [`DrawParameters`](crate::DrawParameters) applies, plus the classic
/// leak candidates (scissor, stencil, cull, depth func) that a drifting
/// renderer most often leaves behind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GlParameter {
    /// Blending enabled (`GL_BLEND`).
    Blend,
    /// RGB source blend factor (`GL_BLEND_SRC_RGB`).
    BlendSrcRgb,
    /// RGB destination blend factor (`GL_BLEND_DST_RGB`).
    BlendDstRgb,
    /// Alpha source blend factor (`GL_BLEND_SRC_ALPHA`).
    BlendSrcAlpha,
    /// Alpha destination blend factor (`GL_BLEND_DST_ALPHA`).
    BlendDstAlpha,
    /// RGB blend equation (`GL_BLEND_EQUATION_RGB`).
    BlendEquationRgb,
    /// Alpha blend equation (`GL_BLEND_EQUATION_ALPHA`).
    BlendEquationAlpha,
    /// Depth testing enabled (`GL_DEPTH_TEST`).
    DepthTest,
    /// Depth buffer writes enabled (`GL_DEPTH_WRITEMASK`).
    DepthWritemask,
    /// Depth comparison function (`GL_DEPTH_FUNC`).
    DepthFunc,
    /// Stencil testing enabled (`GL_STENCIL_TEST`).
    StencilTest,
    /// Scissor testing enabled (`GL_SCISSOR_TEST`).
    ScissorTest,
    /// Face culling enabled (`GL_CULL_FACE`).
    CullFace,
    /// Draw framebuffer binding (`GL_DRAW_FRAMEBUFFER_BINDING`).
    DrawFramebufferBinding,
    /// Read framebuffer binding (`GL_READ_FRAMEBUFFER_BINDING`).
    ReadFramebufferBinding,
}

impl GlParameter {
    /// Every key in the reconciled set, in snapshot order.
    pub const ALL: [Self; 15] = [
        Self::Blend,
        Self::BlendSrcRgb,
        Self::BlendDstRgb,
        Self::BlendSrcAlpha,
        Self::BlendDstAlpha,
        Self::BlendEquationRgb,
        Self::BlendEquationAlpha,
        Self::DepthTest,
        Self::DepthWritemask,
        Self::DepthFunc,
        Self::StencilTest,
        Self::ScissorTest,
        Self::CullFace,
        Self::DrawFramebufferBinding,
        Self::ReadFramebufferBinding,
    ];

    /// The GL enum value queried for this key.
    #[inline]
    #[must_use]
    pub const fn gl_enum(self) -> u32 {
        match self {
            Self::Blend => 0x0BE2,
            Self::BlendSrcRgb => 0x80C9,
            Self::BlendDstRgb => 0x80C8,
            Self::BlendSrcAlpha => 0x80CB,
            Self::BlendDstAlpha => 0x80CA,
            Self::BlendEquationRgb => 0x8009,
            Self::BlendEquationAlpha => 0x883D,
            Self::DepthTest => 0x0B71,
            Self::DepthWritemask => 0x0B72,
            Self::DepthFunc => 0x0B74,
            Self::StencilTest => 0x0B90,
            Self::ScissorTest => 0x0C11,
            Self::CullFace => 0x0B44,
            Self::DrawFramebufferBinding => 0x8CA6,
            Self::ReadFramebufferBinding => 0x8CAA,
        }
    }

    /// The symbolic GL name, without the `GL_` prefix.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blend => "BLEND",
            Self::BlendSrcRgb => "BLEND_SRC_RGB",
            Self::BlendDstRgb => "BLEND_DST_RGB",
            Self::BlendSrcAlpha => "BLEND_SRC_ALPHA",
            Self::BlendDstAlpha => "BLEND_DST_ALPHA",
            Self::BlendEquationRgb => "BLEND_EQUATION_RGB",
            Self::BlendEquationAlpha => "BLEND_EQUATION_ALPHA",
            Self::DepthTest => "DEPTH_TEST",
            Self::DepthWritemask => "DEPTH_WRITEMASK",
            Self::DepthFunc => "DEPTH_FUNC",
            Self::StencilTest => "STENCIL_TEST",
            Self::ScissorTest => "SCISSOR_TEST",
            Self::CullFace => "CULL_FACE",
            Self::DrawFramebufferBinding => "DRAW_FRAMEBUFFER_BINDING",
            Self::ReadFramebufferBinding => "READ_FRAMEBUFFER_BINDING",
        }
    }

    /// Looks up a key from its GL enum value.
    #[must_use]
    pub const fn from_gl_enum(value: u32) -> Option<Self> {
        match value {
            0x0BE2 => Some(Self::Blend),
            0x80C9 => Some(Self::BlendSrcRgb),
            0x80C8 => Some(Self::BlendDstRgb),
            0x80CB => Some(Self::BlendSrcAlpha),
            0x80CA => Some(Self::BlendDstAlpha),
            0x8009 => Some(Self::BlendEquationRgb),
            0x883D => Some(Self::BlendEquationAlpha),
            0x0B71 => Some(Self::DepthTest),
            0x0B72 => Some(Self::DepthWritemask),
            0x0B74 => Some(Self::DepthFunc),
            0x0B90 => Some(Self::StencilTest),
            0x0C11 => Some(Self::ScissorTest),
            0x0B44 => Some(Self::CullFace),
            0x8CA6 => Some(Self::DrawFramebufferBinding),
            0x8CAA => Some(Self::ReadFramebufferBinding),
            _ => None,
        }
    }

    /// Position of this key in [`Self::ALL`] and in snapshot storage.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// A tagged parameter value.
///
/// Each [`GlParameter`] carries exactly one of these shapes; mixing them up
/// is a bug in the context implementation, not a runtime condition this
/// crate defends against.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GlValue {
    /// An enable/disable capability.
    Toggle(bool),
    /// A blend function factor.
    Factor(BlendFactor),
    /// A blend equation mode.
    Equation(BlendEquation),
    /// A depth comparison function.
    Compare(CompareFunc),
    /// A framebuffer binding; `None` is the default framebuffer.
    Framebuffer(Option<FramebufferId>),
}

impl GlValue {
    /// The symbolic GL name for enum-shaped values, if there is one.
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> Option<&'static str> {
        match self {
            Self::Factor(factor) => Some(factor.name()),
            Self::Equation(equation) => Some(equation.name()),
            Self::Compare(func) => Some(func.name()),
            Self::Toggle(_) | Self::Framebuffer(_) => None,
        }
    }
}

impl fmt::Display for GlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Toggle(true) => write!(f, "true"),
            Self::Toggle(false) => write!(f, "false"),
            Self::Factor(factor) => write!(f, "{}", factor.name()),
            Self::Equation(equation) => write!(f, "{}", equation.name()),
            Self::Compare(func) => write!(f, "{}", func.name()),
            Self::Framebuffer(None) => write!(f, "null"),
            Self::Framebuffer(Some(id)) => write!(f, "framebuffer({})", id.0),
        }
    }
}
