//! Construction-domain gate.
//!
//! A query is in-domain when its lower-cased text contains any vocabulary
//! term as a substring, or failing that, when it matches one of the word-stem
//! patterns. There is no scoring and no conversation context; short
//! vocabulary entries such as acronyms will produce false positives inside
//! longer words and that is accepted.

use once_cell::sync::Lazy;
use regex::RegexSet;

/// Construction vocabulary, matched case-insensitively as substrings.
pub const VOCABULARY: &[&str] = &[
    // Core construction terms
    "construction", "building", "contractor", "subcontractor", "general contractor",
    "construction management", "project management", "site management", "construction site",
    // Engineering and architecture
    "civil engineering", "structural engineering", "architecture", "architectural design",
    "structural design", "engineering drawings", "blueprints", "CAD", "AutoCAD", "BIM",
    "building information modeling", "3D modeling", "design specifications",
    // Indian standards and codes
    "IS code", "IS 456", "IS 800", "IS 1893", "IS 875", "IS 10262", "IS 383", "IS 2062",
    "NBC", "National Building Code", "BIS", "Bureau of Indian Standards", "CPWD", "PWD",
    "IGBC", "GRIHA", "LEED India", "building bylaws", "development control rules",
    // Materials
    "concrete", "steel", "rebar", "TMT bars", "reinforcement", "cement", "OPC", "PPC",
    "mortar", "aggregate", "sand", "coarse aggregate", "fine aggregate",
    "lumber", "wood", "timber", "teak", "sal", "deodar", "framing", "drywall", "gypsum",
    "insulation", "roofing", "tiles", "flooring", "foundation", "masonry", "brick",
    "stone", "glass", "aluminum", "copper", "piping", "plumbing", "electrical",
    "wiring", "HVAC", "ductwork", "ventilation", "air conditioning", "heating",
    // Safety and regulation
    "safety", "construction safety", "safety regulations", "safety equipment", "hard hat",
    "safety vest", "fall protection", "scaffolding", "harness", "safety protocols",
    "workplace safety", "hazard", "risk assessment", "BOCW act", "factories act",
    "contract labour act", "environmental clearance", "pollution control board",
    // Techniques and equipment
    "excavation", "grading", "demolition", "renovation", "remodeling",
    "carpentry", "welding", "soldering", "painting", "finishing",
    "crane", "bulldozer", "excavator", "backhoe", "loader", "dump truck",
    "heavy machinery", "equipment", "tools", "power tools", "hand tools",
    "ready mix concrete", "precast", "prefabrication",
    // Project management and estimation
    "cost estimation", "budget", "bidding", "tender", "proposal", "contract", "schedule",
    "timeline", "critical path", "gantt chart", "milestone", "deliverable",
    "resource planning", "labor", "workforce", "productivity", "efficiency",
    "rate analysis", "CPWD rates", "PWD rates", "BOQ", "bill of quantities",
    "GST", "goods and services tax", "VAT", "material rates",
    // Specialised areas
    "geotechnical", "soil", "foundation design", "load bearing", "structural load",
    "seismic", "earthquake", "seismic zone", "wind load", "monsoon", "waterproofing",
    "drainage", "utilities", "infrastructure", "bridge", "tunnel", "road", "highway",
    "pavement", "residential", "commercial", "industrial", "institutional",
    "green building", "sustainable construction", "energy efficiency",
    // Regional and climate
    "tropical climate", "monsoon construction", "coastal construction", "CRZ",
    "coastal regulation zone", "earthquake resistant", "cyclone resistant",
    "flood resistant", "thermal comfort", "natural ventilation",
    // Site practice
    "mason", "mistri", "mazdoor", "skilled labor", "unskilled labor", "gang work",
    "piece rate", "daily wage", "material handling", "material storage",
    "site supervision", "quality control", "quality assurance",
    // Processes and standards
    "surveying", "site preparation", "layout", "staking", "elevation", "grade",
    "specification", "standard", "code compliance", "building permit", "approval",
    "environmental impact", "sustainability", "waste management", "recycling",
    "municipal corporation", "town planning", "urban development",
];

/// Word-stem patterns tried when no vocabulary term matched.
pub const STEM_PATTERNS: &[&str] = &[
    r"\bbuild\w*",
    r"\bconstruct\w*",
    r"\bengineer\w*",
    r"\bdesign\w*",
    r"\barchitect\w*",
    r"\bproject\s+manag\w*",
    r"\bcost\s+estimat\w*",
    r"\bsafety\s+regulat\w*",
];

static LOWERCASE_VOCABULARY: Lazy<Vec<String>> =
    Lazy::new(|| VOCABULARY.iter().map(|term| term.to_lowercase()).collect());

static STEMS: Lazy<RegexSet> =
    Lazy::new(|| RegexSet::new(STEM_PATTERNS).expect("stem patterns are valid regexes"));

/// Decides whether `query` is about the construction industry.
///
/// Empty and whitespace-only input is out of domain.
pub fn classify(query: &str) -> bool {
    if query.trim().is_empty() {
        return false;
    }

    let lowered = query.to_lowercase();

    LOWERCASE_VOCABULARY
        .iter()
        .any(|term| lowered.contains(term.as_str()))
        || STEMS.is_match(&lowered)
}
