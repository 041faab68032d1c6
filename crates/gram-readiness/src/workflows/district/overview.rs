use serde::Serialize;

use crate::workflows::readiness::{PriorityTier, ReadinessColor, ReadinessSnapshot};
use crate::workflows::survey::VillageId;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapEntry {
    pub village_id: VillageId,
    pub village_name: String,
    pub color: ReadinessColor,
    pub readiness: u8,
    pub priority: PriorityTier,
    pub surveys: usize,
    pub disadvantaged_population: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DistrictStats {
    pub total_villages: usize,
    pub red: usize,
    pub yellow: usize,
    pub green: usize,
    pub gray: usize,
    pub average_readiness: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistrictOverview {
    pub stats: DistrictStats,
    pub heatmap: Vec<HeatmapEntry>,
}

/// Color-coded heatmap of every village, most ready first.
pub fn district_overview(snapshots: &[ReadinessSnapshot]) -> DistrictOverview {
    let mut stats = DistrictStats {
        total_villages: snapshots.len(),
        ..DistrictStats::default()
    };

    for snapshot in snapshots {
        match snapshot.color {
            ReadinessColor::Red => stats.red += 1,
            ReadinessColor::Yellow => stats.yellow += 1,
            ReadinessColor::Green => stats.green += 1,
            ReadinessColor::Gray => stats.gray += 1,
        }
    }

    if !snapshots.is_empty() {
        let total: u32 = snapshots
            .iter()
            .map(|snapshot| u32::from(snapshot.overall_readiness))
            .sum();
        let average = (f64::from(total) / snapshots.len() as f64).round();
        stats.average_readiness = average.clamp(0.0, 100.0) as u8;
    }

    let mut heatmap: Vec<HeatmapEntry> = snapshots
        .iter()
        .map(|snapshot| HeatmapEntry {
            village_id: snapshot.village_id.clone(),
            village_name: snapshot.village_name.clone(),
            color: snapshot.color,
            readiness: snapshot.overall_readiness,
            priority: snapshot.priority,
            surveys: snapshot.total_surveys,
            disadvantaged_population: snapshot.disadvantaged_population,
        })
        .collect();

    heatmap.sort_by(|a, b| {
        b.readiness
            .cmp(&a.readiness)
            .then_with(|| a.village_name.cmp(&b.village_name))
    });

    DistrictOverview { stats, heatmap }
}
