use super::domain::{AnswerType, Domain, Indicator};

use AnswerType::{Percentage, YesNo};

type IndicatorRow = (&'static str, AnswerType, &'static str, &'static str);

pub(super) fn standard_domains() -> Vec<Domain> {
    vec![
        domain(
            "drinkingWaterSanitation",
            "Drinking Water & Sanitation",
            &[
                ("DW1", YesNo, "drinkingWater", "Is piped drinking water available in the village?"),
                ("DW2", Percentage, "cleanWater", "Share of households with access to clean water"),
                ("DW3", YesNo, "IHHL", "Does the household have an individual latrine?"),
                ("DW4", YesNo, "schoolToilets", "Do village schools have functional toilets?"),
                ("DW5", Percentage, "ODF", "Share of the village that is open-defecation free"),
                ("DW6", YesNo, "drains", "Are covered drains constructed along village lanes?"),
                ("DW7", Percentage, "drainsFunctioning", "Share of drains that are functioning"),
                ("DW8", YesNo, "wasteManagement", "Is there a waste management arrangement?"),
            ],
        )
        .with_recommendation("Water Supply System", "Jal Jeevan Mission", 60_000),
        domain(
            "education",
            "Education",
            &[
                ("ED1", Percentage, "attendance6_10", "School attendance of children aged 6-10"),
                ("ED2", Percentage, "attendance11_14", "School attendance of children aged 11-14"),
                ("ED3", Percentage, "girlsAttendance", "School attendance of girls"),
                ("ED4", Percentage, "dropoutRate", "Share of children retained without dropping out"),
            ],
        )
        .with_recommendation("School Infrastructure", "PM Poshan Shakti Nirman", 50_000),
        domain(
            "health",
            "Health",
            &[
                ("HL1", YesNo, "ambulanceService", "Is an ambulance service reachable from the village?"),
                ("HL2", YesNo, "anganwadiFunctioning", "Is the anganwadi centre functioning?"),
                ("HL3", Percentage, "immunization", "Share of children fully immunized"),
                ("HL4", Percentage, "pregnantWomenAnemia", "Share of pregnant women free of anemia"),
            ],
        )
        .with_recommendation("Primary Health Center", "National Health Mission (NHM)", 70_000),
        domain(
            "roadsConnectivity",
            "Roads & Connectivity",
            &[
                ("RC1", YesNo, "allWeatherRoad", "Is the village connected by an all-weather road?"),
                ("RC2", Percentage, "roadConditionGood", "Share of internal roads in good condition"),
                ("RC3", YesNo, "internetConnectivity", "Is broadband internet available?"),
                ("RC4", YesNo, "mobileNetworkCoverage", "Is there reliable mobile network coverage?"),
            ],
        )
        .with_recommendation("Road Construction", "PM Gram Sadak Yojana (PMGSY)", 80_000),
        domain(
            "electricity",
            "Electricity",
            &[
                ("EL1", YesNo, "villageElectrified", "Is the village electrified?"),
                ("EL2", Percentage, "householdElectrified", "Share of households with electricity"),
                ("EL3", YesNo, "solarPanelsInstalled", "Are solar panels installed for public use?"),
            ],
        )
        .with_recommendation("Solar Electrification", "Saubhagya Scheme", 55_000),
        domain(
            "livelihood",
            "Livelihood & Skill Development",
            &[
                ("LV1", YesNo, "skillTrainingAvailable", "Is skill training available nearby?"),
                ("LV2", Percentage, "employmentGenerated", "Share of job seekers employed through schemes"),
                ("LV3", YesNo, "selfHelpGroupsActive", "Are self help groups active in the village?"),
            ],
        )
        .with_recommendation(
            "Skill Development Center",
            "National Rural Livelihood Mission (NRLM)",
            35_000,
        ),
        domain(
            "sanitation",
            "Sanitation & Waste Management",
            &[
                ("SN1", YesNo, "solidWasteCollection", "Is solid waste collected door to door?"),
                ("SN2", YesNo, "liquidWasteDisposal", "Is liquid waste safely disposed?"),
                ("SN3", Percentage, "toiletsFunctional", "Share of toilets that are functional"),
                ("SN4", Percentage, "communityCleanliness", "Community cleanliness rating"),
            ],
        )
        .with_recommendation("Waste Management System", "Swachh Bharat Mission", 40_000),
    ]
}

fn domain(key: &'static str, name: &'static str, rows: &[IndicatorRow]) -> Domain {
    let indicators = rows
        .iter()
        .map(|(id, answer_type, sector, question)| {
            Indicator::new(*id, key, *answer_type, *question).with_sector(*sector)
        })
        .collect();
    Domain::new(key, name, indicators)
}
