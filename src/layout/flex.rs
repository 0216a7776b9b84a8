//! # Flexbox Resolver
//!
//! A box-model-agnostic implementation of single-line flexbox
//! resolution. Items go in as abstract `{basis, grow, shrink, min, max}`
//! records with no knowledge of node kinds; positioned and sized items
//! come out. The layout pass maps wireframe children onto these records
//! and reads the answers back.
//!
//! The flexible-length loop follows the CSS algorithm: distribute free
//! space proportionally, clamp, freeze every item whose clamp produced a
//! violation, repeat. The loop is a pure function from item list to item
//! list and is bounded by `items.len() + 1` iterations — at least one
//! item freezes per pass, and the bound keeps pathological all-zero
//! factor inputs from spinning.

use crate::model::{Align, Justify};

/// Tolerance for the accumulated clamping violation that ends the
/// flexible-length loop.
const VIOLATION_EPSILON: f64 = 0.01;

/// Starting main size of an item before free-space distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Basis {
    /// Use the item's content size.
    Auto,
    /// Same as `Auto`; kept distinct because the wireframe language
    /// spells both.
    Content,
    /// An explicit main-axis length.
    Length(f64),
}

/// An abstract flex item, independent of UI semantics.
#[derive(Debug, Clone)]
pub struct FlexItem {
    pub basis: Basis,
    pub grow: f64,
    pub shrink: f64,
    pub min_size: f64,
    pub max_size: f64,
    /// Natural main-axis size, used when `basis` is auto/content.
    pub content_size: f64,
    /// Natural cross-axis size.
    pub cross_size: f64,
    /// Per-item override of the container's `align_items`.
    pub align_self: Option<Align>,
}

impl Default for FlexItem {
    fn default() -> Self {
        Self {
            basis: Basis::Auto,
            grow: 0.0,
            shrink: 1.0,
            min_size: 0.0,
            max_size: f64::INFINITY,
            content_size: 0.0,
            cross_size: 0.0,
            align_self: None,
        }
    }
}

/// Container configuration for one resolution run.
#[derive(Debug, Clone)]
pub struct FlexConfig {
    /// Inner main-axis extent to distribute.
    pub main_size: f64,
    /// Inner cross-axis extent; `None` means "max of item cross sizes".
    pub cross_size: Option<f64>,
    pub justify: Justify,
    pub align: Align,
    pub gap: f64,
}

/// A resolved item. `frozen` means the main size is final and was not
/// revisited after the iteration that set it.
#[derive(Debug, Clone)]
pub struct ComputedItem {
    pub index: usize,
    pub flex_basis: f64,
    pub main_size: f64,
    pub cross_size: f64,
    pub main_pos: f64,
    pub cross_pos: f64,
    pub frozen: bool,
    pub scaled_shrink_factor: f64,
}

/// The result of one resolution run.
#[derive(Debug, Clone)]
pub struct FlexLayout {
    pub items: Vec<ComputedItem>,
    /// Extent from the container's inner start edge to the trailing edge
    /// of the last item.
    pub main_size_used: f64,
    /// Largest resolved cross size among the items.
    pub cross_size_max: f64,
}

/// Resolve main/cross sizes and positions for a single flex line.
pub fn compute_flex_layout(items: &[FlexItem], config: &FlexConfig) -> FlexLayout {
    let n = items.len();
    if n == 0 {
        return FlexLayout {
            items: vec![],
            main_size_used: 0.0,
            cross_size_max: 0.0,
        };
    }

    // 1. Resolve each item's flex basis, clamped into [min, max].
    let mut computed: Vec<ComputedItem> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let raw = match item.basis {
                Basis::Auto | Basis::Content => item.content_size,
                Basis::Length(v) => v,
            };
            let flex_basis = raw.clamp(item.min_size, item.max_size);
            ComputedItem {
                index,
                flex_basis,
                main_size: flex_basis,
                cross_size: item.cross_size,
                main_pos: 0.0,
                cross_pos: 0.0,
                frozen: false,
                scaled_shrink_factor: item.shrink * flex_basis,
            }
        })
        .collect();

    let total_gap = (config.gap * (n as f64 - 1.0)).max(0.0);
    let basis_sum: f64 = computed.iter().map(|c| c.flex_basis).sum();
    let free_space = config.main_size - basis_sum - total_gap;

    // 2. Flexible-length resolution.
    if free_space != 0.0 {
        computed = resolve_flexible_lengths(computed, items, config.main_size, total_gap, free_space > 0.0);
    } else {
        for item in &mut computed {
            item.frozen = true;
        }
    }

    // 3. Main-axis distribution per justify-content.
    let used: f64 = computed.iter().map(|c| c.main_size).sum::<f64>() + total_gap;
    let remaining = config.main_size - used;
    let (leading, extra_gap) = justify_offsets(config.justify, remaining, n);

    let mut cursor = leading;
    for item in &mut computed {
        item.main_pos = cursor;
        cursor += item.main_size + config.gap + extra_gap;
    }
    let main_size_used = computed
        .last()
        .map(|c| c.main_pos + c.main_size)
        .unwrap_or(0.0);

    // 4. Cross-axis alignment.
    let natural_cross = computed
        .iter()
        .map(|c| c.cross_size)
        .fold(0.0_f64, f64::max);
    let container_cross = config.cross_size.unwrap_or(natural_cross);
    for (item, props) in computed.iter_mut().zip(items) {
        match props.align_self.unwrap_or(config.align) {
            Align::Stretch => {
                item.cross_size = container_cross;
                item.cross_pos = 0.0;
            }
            // Baseline alignment is intentionally simplified to start.
            Align::Start | Align::Baseline => item.cross_pos = 0.0,
            Align::End => item.cross_pos = container_cross - item.cross_size,
            Align::Center => item.cross_pos = (container_cross - item.cross_size) / 2.0,
        }
    }
    let cross_size_max = computed
        .iter()
        .map(|c| c.cross_size)
        .fold(0.0_f64, f64::max);

    FlexLayout {
        items: computed,
        main_size_used,
        cross_size_max,
    }
}

/// One pass of the freeze loop: distribute the current free space over
/// unfrozen items, clamp, and freeze violators. Returns the next item
/// list plus the total violation observed.
fn distribute_pass(
    current: &[ComputedItem],
    props: &[FlexItem],
    main_size: f64,
    total_gap: f64,
    growing: bool,
) -> (Vec<ComputedItem>, f64, f64) {
    let frozen_main: f64 = current
        .iter()
        .filter(|c| c.frozen)
        .map(|c| c.main_size)
        .sum();
    let unfrozen_basis: f64 = current
        .iter()
        .filter(|c| !c.frozen)
        .map(|c| c.flex_basis)
        .sum();
    let free = main_size - total_gap - frozen_main - unfrozen_basis;

    let factor_sum: f64 = current
        .iter()
        .filter(|c| !c.frozen)
        .map(|c| {
            if growing {
                props[c.index].grow
            } else {
                c.scaled_shrink_factor
            }
        })
        .sum();

    let mut total_violation = 0.0;
    let next = current
        .iter()
        .map(|c| {
            if c.frozen || factor_sum <= 0.0 {
                return c.clone();
            }
            let share = if growing {
                props[c.index].grow / factor_sum
            } else {
                c.scaled_shrink_factor / factor_sum
            };
            let target = c.flex_basis + free * share;
            let clamped = target.clamp(props[c.index].min_size, props[c.index].max_size);
            let violation = clamped - target;
            let mut item = c.clone();
            item.main_size = clamped;
            if violation.abs() > f64::EPSILON {
                item.frozen = true;
                total_violation += violation;
            }
            item
        })
        .collect();

    (next, total_violation, factor_sum)
}

/// Iteratively resolve flexible lengths. Pure: each iteration maps the
/// previous item list to a new one. Terminates when the accumulated
/// violation falls inside the tolerance, when the flex-factor sum hits
/// zero (remaining items freeze at basis), or at the `n + 1` iteration
/// bound — whichever comes first.
fn resolve_flexible_lengths(
    mut computed: Vec<ComputedItem>,
    props: &[FlexItem],
    main_size: f64,
    total_gap: f64,
    growing: bool,
) -> Vec<ComputedItem> {
    let max_iterations = props.len() + 1;
    for _ in 0..max_iterations {
        if computed.iter().all(|c| c.frozen) {
            break;
        }
        let (next, total_violation, factor_sum) =
            distribute_pass(&computed, props, main_size, total_gap, growing);
        computed = next;

        if factor_sum <= 0.0 {
            // Nothing left that can flex: everything holds its basis.
            for item in &mut computed {
                if !item.frozen {
                    item.main_size = item.flex_basis;
                    item.frozen = true;
                }
            }
            break;
        }
        if total_violation.abs() <= VIOLATION_EPSILON {
            for item in &mut computed {
                item.frozen = true;
            }
            break;
        }
    }
    computed
}

/// Leading offset and per-gap addition for a justify mode, given the
/// remaining free space after sizing. `Between` with a single item falls
/// back to `Start` rather than dividing by zero.
fn justify_offsets(justify: Justify, remaining: f64, n: usize) -> (f64, f64) {
    let count = n as f64;
    match justify {
        Justify::Start => (0.0, 0.0),
        Justify::End => (remaining, 0.0),
        Justify::Center => (remaining / 2.0, 0.0),
        Justify::Between if n > 1 => (0.0, remaining / (count - 1.0)),
        Justify::Between => (0.0, 0.0),
        Justify::Around => (remaining / count / 2.0, remaining / count),
        Justify::Evenly => (remaining / (count + 1.0), remaining / (count + 1.0)),
    }
}
