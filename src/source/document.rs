//! The decoded source document (§3.1)

use super::block::BlockDefinition;
use super::entity::Entity;

/// Layer state, shared by `Layer` and `LayerGroup`
///
/// 0 = hidden, 1 = display-only, 2 = editable, 3 = write.
pub type LayerState = u8;

/// A single layer within a layer group
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layer {
    pub state: LayerState,
    pub protect: bool,
    pub name: Option<String>,
}

/// One of the 16 layer groups, each holding 16 layers
#[derive(Debug, Clone, PartialEq)]
pub struct LayerGroup {
    pub state: LayerState,
    pub active_layer: u16,
    pub scale: f64,
    pub protect: bool,
    pub layers: [Layer; 16],
    pub name: Option<String>,
}

impl Default for LayerGroup {
    fn default() -> Self {
        LayerGroup {
            state: 0,
            active_layer: 0,
            scale: 1.0,
            protect: false,
            layers: std::array::from_fn(|_| Layer::default()),
            name: None,
        }
    }
}

/// The fully decoded source document (§3.1)
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub version: u32,
    pub memo: Option<String>,
    pub paper_size: u32,
    pub active_layer_group: u16,
    pub layer_groups: [LayerGroup; 16],
    pub entities: Vec<Entity>,
    pub block_defs: Vec<BlockDefinition>,
}

impl Document {
    /// EntityBase width depends on this: pen-width is present only when
    /// `version >= 351` (§3.1, §4.2, Design note "version-conditional
    /// record layout").
    pub fn has_pen_width(&self) -> bool {
        self.version >= 351
    }
}
