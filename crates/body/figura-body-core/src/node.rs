//! The closed catalog of skeletal locations and their fixed hierarchy.

use serde::{Deserialize, Serialize};

/// One named location in the fixed skeletal hierarchy.
///
/// The catalog is closed: defined once, never extended at runtime, and every
/// [`BodyTree`](crate::BodyTree) covers all of it. Declaration order (and the
/// derived `Ord`) always lists a parent before its children, so walking
/// [`BodyNode::ALL`] front to back visits the hierarchy top-down.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum BodyNode {
    Sacrum,
    L3,
    T12,
    T7,
    C7,
    Head,
    Eyes,
    HeadTop,
    RightClavicle,
    RightScapula,
    RightUpperArm,
    RightForearm,
    RightWrist,
    RightHand,
    LeftClavicle,
    LeftScapula,
    LeftUpperArm,
    LeftForearm,
    LeftWrist,
    LeftHand,
    RightUpperLeg,
    RightLowerLeg,
    RightFoot,
    RightToes,
    LeftUpperLeg,
    LeftLowerLeg,
    LeftFoot,
    LeftToes,
}

impl BodyNode {
    /// Number of nodes in the catalog.
    pub const COUNT: usize = 28;

    /// Every node, in deterministic parent-before-child order.
    pub const ALL: [BodyNode; BodyNode::COUNT] = [
        BodyNode::Sacrum,
        BodyNode::L3,
        BodyNode::T12,
        BodyNode::T7,
        BodyNode::C7,
        BodyNode::Head,
        BodyNode::Eyes,
        BodyNode::HeadTop,
        BodyNode::RightClavicle,
        BodyNode::RightScapula,
        BodyNode::RightUpperArm,
        BodyNode::RightForearm,
        BodyNode::RightWrist,
        BodyNode::RightHand,
        BodyNode::LeftClavicle,
        BodyNode::LeftScapula,
        BodyNode::LeftUpperArm,
        BodyNode::LeftForearm,
        BodyNode::LeftWrist,
        BodyNode::LeftHand,
        BodyNode::RightUpperLeg,
        BodyNode::RightLowerLeg,
        BodyNode::RightFoot,
        BodyNode::RightToes,
        BodyNode::LeftUpperLeg,
        BodyNode::LeftLowerLeg,
        BodyNode::LeftFoot,
        BodyNode::LeftToes,
    ];

    /// Position of this node in the catalog order.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Parent in the fixed hierarchy, or `None` for the skeletal root.
    pub const fn parent(self) -> Option<BodyNode> {
        use BodyNode::*;
        match self {
            Sacrum => None,
            L3 => Some(Sacrum),
            T12 => Some(L3),
            T7 => Some(T12),
            C7 => Some(T7),
            Head => Some(C7),
            Eyes => Some(Head),
            HeadTop => Some(Head),
            RightClavicle => Some(C7),
            RightScapula => Some(RightClavicle),
            RightUpperArm => Some(RightScapula),
            RightForearm => Some(RightUpperArm),
            RightWrist => Some(RightForearm),
            RightHand => Some(RightWrist),
            LeftClavicle => Some(C7),
            LeftScapula => Some(LeftClavicle),
            LeftUpperArm => Some(LeftScapula),
            LeftForearm => Some(LeftUpperArm),
            LeftWrist => Some(LeftForearm),
            LeftHand => Some(LeftWrist),
            RightUpperLeg => Some(Sacrum),
            RightLowerLeg => Some(RightUpperLeg),
            RightFoot => Some(RightLowerLeg),
            RightToes => Some(RightFoot),
            LeftUpperLeg => Some(Sacrum),
            LeftLowerLeg => Some(LeftUpperLeg),
            LeftFoot => Some(LeftLowerLeg),
            LeftToes => Some(LeftFoot),
        }
    }

    /// The same location on the opposite side of the body, or `self` for
    /// nodes on the sagittal plane.
    pub const fn mirror(self) -> BodyNode {
        use BodyNode::*;
        match self {
            RightClavicle => LeftClavicle,
            RightScapula => LeftScapula,
            RightUpperArm => LeftUpperArm,
            RightForearm => LeftForearm,
            RightWrist => LeftWrist,
            RightHand => LeftHand,
            LeftClavicle => RightClavicle,
            LeftScapula => RightScapula,
            LeftUpperArm => RightUpperArm,
            LeftForearm => RightForearm,
            LeftWrist => RightWrist,
            LeftHand => RightHand,
            RightUpperLeg => LeftUpperLeg,
            RightLowerLeg => LeftLowerLeg,
            RightFoot => LeftFoot,
            RightToes => LeftToes,
            LeftUpperLeg => RightUpperLeg,
            LeftLowerLeg => RightLowerLeg,
            LeftFoot => RightFoot,
            LeftToes => RightToes,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_dense() {
        assert_eq!(BodyNode::ALL.len(), BodyNode::COUNT);
        for (i, node) in BodyNode::ALL.iter().enumerate() {
            assert_eq!(node.index(), i);
        }
    }

    #[test]
    fn parents_precede_children() {
        for node in BodyNode::ALL {
            if let Some(parent) = node.parent() {
                assert!(
                    parent.index() < node.index(),
                    "{parent:?} must precede {node:?}"
                );
            }
        }
    }

    #[test]
    fn sacrum_is_the_only_root() {
        let roots: Vec<_> = BodyNode::ALL
            .iter()
            .filter(|n| n.parent().is_none())
            .collect();
        assert_eq!(roots, vec![&BodyNode::Sacrum]);
    }

    #[test]
    fn mirror_is_an_involution() {
        for node in BodyNode::ALL {
            assert_eq!(node.mirror().mirror(), node);
        }
    }

    #[test]
    fn nodes_serialize_by_name() {
        assert_eq!(serde_json::to_string(&BodyNode::C7).unwrap(), "\"C7\"");
        let back: BodyNode = serde_json::from_str("\"LeftWrist\"").unwrap();
        assert_eq!(back, BodyNode::LeftWrist);
    }
}
