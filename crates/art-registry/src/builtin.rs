//! Templates bundled with the crate
//!
//! Definitions live as JSON under `templates/` and are embedded at compile
//! time, so the builtin catalog needs no I/O.

use crate::error::RegistryResult;
use crate::registry::TemplateRegistryBuilder;

/// Bundled definitions as `(source name, json)` in catalog order
pub const BUILTIN_DEFINITIONS: &[(&str, &str)] = &[
    ("line-chart.json", include_str!("../templates/line-chart.json")),
    ("scatter-plot.json", include_str!("../templates/scatter-plot.json")),
    ("bar-chart.json", include_str!("../templates/bar-chart.json")),
    ("multi-line.json", include_str!("../templates/multi-line.json")),
    ("area-chart.json", include_str!("../templates/area-chart.json")),
    ("generic-calculator.json", include_str!("../templates/generic-calculator.json")),
    ("unit-converter.json", include_str!("../templates/unit-converter.json")),
    ("formula-calculator.json", include_str!("../templates/formula-calculator.json")),
    ("hello-react.json", include_str!("../templates/hello-react.json")),
    ("recharts-line.json", include_str!("../templates/recharts-line.json")),
    ("recharts-bar.json", include_str!("../templates/recharts-bar.json")),
    ("recharts-area.json", include_str!("../templates/recharts-area.json")),
    ("pv-diagram.json", include_str!("../templates/pv-diagram.json")),
    ("pv-diagram-canvas.json", include_str!("../templates/pv-diagram-canvas.json")),
];

pub(crate) fn register_builtins(builder: &mut TemplateRegistryBuilder) -> RegistryResult<()> {
    for (source_name, json) in BUILTIN_DEFINITIONS {
        builder.register_json(source_name, json)?;
    }
    Ok(())
}
