use crate::domain::entities::ProjectManifest;

/// Render the `.prj` project manifest.
///
/// The description block and the DSS/DXF/GIS export keys are written empty
/// or zeroed; the application fills them in when the project is saved.
pub fn emit_manifest(manifest: &ProjectManifest) -> String {
    let mut out = String::new();
    out.push_str(&format!("Proj Title={}\n", manifest.name()));
    out.push_str(&format!("Current Plan={}\n", ProjectManifest::PLAN_SUFFIX));
    out.push_str("Default Exp/Contr=0.3,0.1\n");
    out.push_str(manifest.units().manifest_line());
    out.push('\n');
    out.push_str(&format!("Geom File={}\n", ProjectManifest::GEOMETRY_SUFFIX));
    out.push_str(&format!("Flow File={}\n", ProjectManifest::FLOW_SUFFIX));
    out.push_str(&format!("Plan File={}\n", ProjectManifest::PLAN_SUFFIX));
    out.push_str("Y Axis Title=Elevation\n");
    out.push_str("X Axis Title(PF)=Main Channel Distance\n");
    out.push_str("X Axis Title(XS)=Station\n");
    out.push_str("BEGIN DESCRIPTION:\n\nEND DESCRIPTION:\n");
    for key in [
        "DSS Start Date",
        "DSS Start Time",
        "DSS End Date",
        "DSS End Time",
        "DSS Export Filename",
    ] {
        out.push_str(key);
        out.push_str("=\n");
    }
    out.push_str("DSS Export Rating Curves= 0 \n");
    out.push_str("DSS Export Rating Curve Sorted= 0 \n");
    out.push_str("DSS Export Volume Flow Curves= 0 \n");
    out.push_str("DXF Filename=\n");
    out.push_str("DXF OffsetX= 0 \n");
    out.push_str("DXF OffsetY= 0 \n");
    out.push_str("DXF ScaleX= 1 \n");
    out.push_str("DXF ScaleY= 10 \n");
    out.push_str("GIS Export Profiles= 0 \n");
    out
}
