//! Actix Web server hosting the dashboard page and its JSON API.
//!
//! The dashboard is loaded once and shared read-only between workers; every request
//! carries the full selection, so handlers keep no state of their own.

use std::fmt::Write as _;

use actix_web::{App, HttpResponse, HttpServer, web};
use anyhow::{Context, Result};
use districtmap::{ChoroplethMap, Dashboard, DashboardView, Selection};
use serde::Deserialize;
use tracing::{debug, info};

use crate::cli::{Cli, ServeArgs};

#[derive(Debug, Default, Deserialize)]
struct ViewQuery {
    region: Option<String>,
    subregion: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RegionQuery {
    region: String,
}

pub fn run(cli: &Cli, args: &ServeArgs) -> Result<()> {
    let data = web::Data::new(super::load_dashboard(cli)?);
    let addr = args.addr.clone();

    info!("[serve] listening on http://{addr}");
    actix_web::rt::System::new()
        .block_on(async move {
            HttpServer::new(move || App::new().app_data(data.clone()).configure(routes))
                .bind(addr.as_str())?
                .run()
                .await
        })
        .with_context(|| format!("[serve] HTTP server on {} failed", args.addr))
}

fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index_route))
        .route("/api/regions", web::get().to(regions_handler))
        .route("/api/subregions", web::get().to(subregions_handler))
        .route("/api/view", web::get().to(view_handler));
}

/// Turn the query into a selection; an absent region means the first one.
fn selection(dashboard: &Dashboard, query: &ViewQuery) -> Option<Selection> {
    let region = match &query.region {
        Some(region) => region.clone(),
        None => dashboard.regions().first()?.to_string(),
    };
    let subregion = query.subregion.as_ref().filter(|s| !s.is_empty());
    Some(Selection { region, subregion: subregion.cloned() })
}

fn not_found(message: impl ToString) -> HttpResponse {
    HttpResponse::NotFound().content_type("text/plain; charset=utf-8").body(message.to_string())
}

async fn index_route(query: web::Query<ViewQuery>, state: web::Data<Dashboard>) -> HttpResponse {
    let Some(selection) = selection(&state, &query) else { return not_found("No regions loaded") };
    debug!("[serve] page {:?}", selection);

    let page = state.view(&selection).and_then(|view| render_page(&view));
    match page {
        Ok(html) => HttpResponse::Ok().content_type("text/html; charset=utf-8").body(html),
        Err(err) => not_found(format!("{err:#}")),
    }
}

async fn regions_handler(state: web::Data<Dashboard>) -> HttpResponse {
    HttpResponse::Ok().json(state.regions())
}

async fn subregions_handler(query: web::Query<RegionQuery>, state: web::Data<Dashboard>) -> HttpResponse {
    match state.subregions(&query.region) {
        Ok(subregions) => HttpResponse::Ok().json(subregions),
        Err(err) => not_found(format!("{err:#}")),
    }
}

async fn view_handler(query: web::Query<ViewQuery>, state: web::Data<Dashboard>) -> HttpResponse {
    let Some(selection) = selection(&state, &query) else { return not_found("No regions loaded") };
    debug!("[serve] api view {:?}", selection);

    match state.view(&selection) {
        Ok(view) => HttpResponse::Ok().json(view.to_json()),
        Err(err) => not_found(format!("{err:#}")),
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn options(out: &mut String, values: &[&str], selected: Option<&str>) -> Result<()> {
    for value in values {
        let attr = if Some(*value) == selected { " selected" } else { "" };
        writeln!(out, r#"<option value="{v}"{attr}>{v}</option>"#, v = escape_html(value))?;
    }
    Ok(())
}

/// Inline SVG for a panel, without the XML declaration.
fn panel(out: &mut String, map: &ChoroplethMap) -> Result<()> {
    let svg = map.to_svg_string()?;
    let body = svg.find("<svg").map_or(svg.as_str(), |i| &svg[i..]);
    writeln!(out, "<section><h2>{}</h2>\n{body}</section>", escape_html(&map.title))?;
    Ok(())
}

/// Full dashboard page: two cascading selectors and two map panels.
fn render_page(view: &DashboardView) -> Result<String> {
    let mut out = String::new();
    writeln!(out, r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>District Map</title>
<style>
    body {{ font-family: sans-serif; margin: 1.5rem; }}
    .row {{ display: flex; gap: 1.5rem; flex-wrap: wrap; }}
    .warning {{ background: #fff3cd; border: 1px solid #ffe69c; padding: 0.75rem; }}
</style>
</head>
<body>
<h1>Indian District Map</h1>
<form class="row" method="get" action="/">
<label>Select State
<select name="region" onchange="location.search='?region='+encodeURIComponent(this.value)">"#)?;
    options(&mut out, &view.regions, Some(view.region.as_str()))?;
    writeln!(out, r#"</select></label>
<label>Select District
<select name="subregion" onchange="this.form.submit()">"#)?;
    options(&mut out, &view.subregions, view.subregion.as_deref())?;
    writeln!(out, "</select></label>\n</form>\n<div class=\"row\">")?;

    panel(&mut out, &view.region_map)?;
    match &view.subregion_map {
        Some(map) => panel(&mut out, map)?,
        None => {
            let warning = view.warning.as_deref().unwrap_or_default();
            writeln!(out, r#"<section><p class="warning">{}</p></section>"#, escape_html(warning))?;
        }
    }

    writeln!(out, "</div>\n</body>\n</html>")?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test};
    use districtmap::{BoundaryCollection, BoundaryFeature, DashboardStyles, DemographicRow, DemographicTable, Geometry};

    use super::*;

    fn dashboard() -> Dashboard {
        let square = |region: &str, subregion: &str, lon: f64| BoundaryFeature::new(region, subregion, Geometry::Polygon(vec![
            vec![[lon, 18.0], [lon + 1.0, 18.0], [lon + 1.0, 19.0], [lon, 18.0]],
        ]));
        Dashboard::new(
            BoundaryCollection::new(vec![
                square("Maharashtra", "Pune", 73.0),
                square("Maharashtra", "Nashik", 74.0),
                square("Daman & Diu", "Diu", 71.0),
            ]),
            DemographicTable::new(vec![DemographicRow::new("Maharashtra", "Pune", 10, 9)]),
            DashboardStyles::default(),
        )
    }

    #[::core::prelude::v1::test]
    fn page_marks_current_selection() {
        let dashboard = dashboard();
        let view = dashboard.view(&Selection::new("Maharashtra").with_subregion("Pune")).unwrap();
        let html = render_page(&view).unwrap();

        assert!(html.contains(r#"<option value="Maharashtra" selected>Maharashtra</option>"#));
        assert!(html.contains(r#"<option value="Pune" selected>Pune</option>"#));
        assert!(html.contains(r#"<option value="Daman &amp; Diu">"#));
        assert!(html.contains("State Map: Maharashtra"));
        assert!(html.contains("District Map: Pune"));
        assert!(!html.contains("<?xml"));
    }

    #[::core::prelude::v1::test]
    fn page_shows_warning_for_missing_subregion() {
        let dashboard = dashboard();
        let view = dashboard.view(&Selection::new("Maharashtra").with_subregion("Thane")).unwrap();
        let html = render_page(&view).unwrap();

        assert!(html.contains(r#"class="warning""#));
        assert!(!html.contains("District Map:"));
    }

    #[::core::prelude::v1::test]
    fn empty_subregion_query_means_default() {
        let dashboard = dashboard();
        let query = ViewQuery { region: None, subregion: Some(String::new()) };
        let selection = selection(&dashboard, &query).unwrap();
        assert_eq!(selection, Selection::new("Daman & Diu"));
    }

    #[actix_web::test]
    async fn api_reports_unknown_region() {
        let app = test::init_service(App::new().app_data(web::Data::new(dashboard())).configure(routes)).await;

        let req = test::TestRequest::get().uri("/api/subregions?region=Atlantis").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get().uri("/api/subregions?region=Maharashtra").to_request();
        let subregions: Vec<String> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(subregions, vec!["Nashik", "Pune"]);
    }

    #[actix_web::test]
    async fn api_view_returns_both_maps() {
        let app = test::init_service(App::new().app_data(web::Data::new(dashboard())).configure(routes)).await;

        let req = test::TestRequest::get().uri("/api/view?region=Maharashtra").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["subregion"], "Nashik");
        assert_eq!(body["region_map"]["features"].as_array().unwrap().len(), 2);
        assert_eq!(body["subregion_map"]["features"][0]["properties"]["male_population"], serde_json::Value::Null);
    }
}
