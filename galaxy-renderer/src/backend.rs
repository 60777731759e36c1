use serde::{Deserialize, Serialize};

/// Which graphics API the frontend should render with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    WebGpu,
    WebGl,
}

/// Result of probing the host for WebGPU, gathered once by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpuCapabilities {
    /// `navigator.gpu` (or equivalent) exists.
    pub api_present: bool,
    /// An adapter was actually granted.
    pub adapter_available: bool,
}

impl GpuCapabilities {
    pub fn supports_webgpu(&self) -> bool {
        self.api_present && self.adapter_available
    }
}

/// Renderer settings handed to every component that needs them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RendererConfig {
    pub kind: RendererKind,
    /// Honour the user's reduced-motion preference (fewer particles).
    pub reduced_motion: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            kind: RendererKind::WebGl,
            reduced_motion: false,
        }
    }
}

impl RendererConfig {
    pub fn from_capabilities(caps: GpuCapabilities) -> Self {
        let kind = if caps.supports_webgpu() {
            RendererKind::WebGpu
        } else {
            if caps.api_present {
                log::warn!("WebGPU API present but no adapter granted; falling back to WebGL");
            }
            RendererKind::WebGl
        };
        Self {
            kind,
            ..Default::default()
        }
    }

    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_selection() {
        let full = GpuCapabilities {
            api_present: true,
            adapter_available: true,
        };
        assert_eq!(RendererConfig::from_capabilities(full).kind, RendererKind::WebGpu);

        let no_adapter = GpuCapabilities {
            api_present: true,
            adapter_available: false,
        };
        assert_eq!(RendererConfig::from_capabilities(no_adapter).kind, RendererKind::WebGl);
        assert_eq!(
            RendererConfig::from_capabilities(GpuCapabilities::default()).kind,
            RendererKind::WebGl
        );
    }

    #[test]
    fn test_serialized_kind() {
        let cfg = RendererConfig::default().with_reduced_motion(true);
        let json = serde_json::to_string(&cfg).unwrap();
        assert_eq!(json, r#"{"kind":"webgl","reduced_motion":true}"#);
    }
}
