//! Flat list to forest conversion.
//!
//! # Responsibility
//! - Resolve `reports_to` pointers into an ordered forest of owned nodes.
//! - Route secretary persons into their manager's side slot.
//!
//! # Invariants
//! - Pure function of its input; no entity is mutated.
//! - Attachment is one level only: each entity's parent is looked up once
//!   against the fixed input, never chased transitively.
//! - Unresolved or absent parents make an entity a forest root.

use crate::model::entity::Entity;
use std::collections::HashMap;

/// Ephemeral hierarchical view over one entity.
///
/// Rebuilt from scratch on every read; nodes carry no identity across
/// rebuilds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub entity: Entity,
    /// Subordinates in source order, excluding the secretary.
    pub children: Vec<TreeNode>,
    /// Side-placed secretary, when one child claims the slot. When several
    /// siblings claim it, the last one in source order wins.
    pub secretary: Option<Box<TreeNode>>,
}

#[derive(Default)]
struct Slot {
    child_indices: Vec<usize>,
    secretary_index: Option<usize>,
}

/// Builds the forest for the given collection, roots in source order.
///
/// Mutual `reports_to` cycles (A under B, B under A) attach the members to
/// each other, so none of them is a root and the whole cycle is absent from
/// the returned forest. That input is already out of contract; the guarantee
/// here is only that it cannot crash or loop.
pub fn build_forest(entities: &[Entity]) -> Vec<TreeNode> {
    let mut index_by_id: HashMap<&str, usize> = HashMap::with_capacity(entities.len());
    for (index, entity) in entities.iter().enumerate() {
        // Later duplicates overwrite earlier ones in the lookup only; every
        // entity still gets its own node.
        index_by_id.insert(entity.id.as_str(), index);
    }

    let mut slots: Vec<Slot> = Vec::with_capacity(entities.len());
    slots.resize_with(entities.len(), Slot::default);
    let mut roots: Vec<usize> = Vec::new();

    for (index, entity) in entities.iter().enumerate() {
        let parent = entity
            .reports_to
            .as_deref()
            .and_then(|id| index_by_id.get(id).copied());

        match parent {
            None => roots.push(index),
            Some(parent_index) => {
                if entity.is_person() && entity.is_secretary {
                    slots[parent_index].secretary_index = Some(index);
                } else {
                    slots[parent_index].child_indices.push(index);
                }
            }
        }
    }

    let mut pending: Vec<Option<Entity>> = entities.iter().cloned().map(Some).collect();
    roots
        .into_iter()
        .filter_map(|root| realize(root, &slots, &mut pending))
        .collect()
}

/// Total number of nodes in the forest, secretaries included.
pub fn forest_size(forest: &[TreeNode]) -> usize {
    forest.iter().map(node_size).sum()
}

fn node_size(node: &TreeNode) -> usize {
    1 + forest_size(&node.children)
        + node.secretary.as_deref().map_or(0, |secretary| node_size(secretary))
}

fn realize(index: usize, slots: &[Slot], pending: &mut [Option<Entity>]) -> Option<TreeNode> {
    let entity = pending[index].take()?;
    let slot = &slots[index];

    let children = slot
        .child_indices
        .iter()
        .filter_map(|&child| realize(child, slots, pending))
        .collect();
    let secretary = slot
        .secretary_index
        .and_then(|secretary| realize(secretary, slots, pending))
        .map(Box::new);

    Some(TreeNode {
        entity,
        children,
        secretary,
    })
}
