use crate::app::App;
use crate::catalog::CatalogError;
use crate::domain::category::{filter_by_category, REAL_ESTATE};
use crate::domain::property::PublicListing;
use crate::domain::search::SearchFilters;
use crate::errors::ServerError;
use crate::forms::{self, PropertyForm};
use crate::responses::{html_response, html_response_with_status, json_response, redirect, ResultResp};
use crate::spreadsheets::export_catalog_xlsx;
use crate::templates::pages::{self, AdminVm, ListingVm};
use astra::Request;
use chrono::Utc;
use tracing::{debug, info, warn};

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(pages::home_page(&app.catalog.all())),
        ("GET", "/listings") => listings(&req, app),
        ("GET", "/search") => search(&req, app),
        ("GET", "/admin") => admin_form(app, PropertyForm::blank(), None, 200),
        ("POST", "/admin/properties") => create_property(&mut req, app),
        ("GET", "/admin/export.xlsx") => {
            export_catalog_xlsx(&app.catalog.all(), &Utc::now().format("%Y-%m-%d").to_string())
        }
        ("GET", "/api/properties") => {
            let properties = app.catalog.all();
            let listings: Vec<PublicListing> =
                properties.iter().map(|p| p.public_listing()).collect();
            json_response(&listings)
        }
        ("GET", p) if p.starts_with("/properties/") => {
            let id = &p["/properties/".len()..];
            let property = app.catalog.get(id).ok_or(ServerError::NotFound)?;
            html_response(pages::property_page(&property))
        }
        _ => Err(ServerError::NotFound),
    }
}

fn listings(req: &Request, app: &App) -> ResultResp {
    let params = forms::parse_query(req);
    let key = params
        .get("category")
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .unwrap_or(REAL_ESTATE);

    let catalog = app.catalog.all();
    let listing = filter_by_category(key, &catalog);

    html_response(pages::listing_page(&ListingVm {
        title: listing.title,
        crumb: key.to_string(),
        properties: &listing.properties,
        filters: None,
    }))
}

fn search(req: &Request, app: &App) -> ResultResp {
    let filters = SearchFilters::from_params(&forms::parse_query(req));
    let found = filters.apply(&app.catalog.all());

    html_response(pages::listing_page(&ListingVm {
        title: filters.title(),
        crumb: filters
            .location
            .clone()
            .unwrap_or_else(|| "Search".to_string()),
        properties: &found,
        filters: Some(&filters),
    }))
}

fn admin_form(app: &App, form: PropertyForm, error: Option<String>, status: u16) -> ResultResp {
    let vm = AdminVm {
        form,
        error,
        properties: app.catalog.all(),
    };
    html_response_with_status(status, pages::admin_page(&vm))
}

fn create_property(req: &mut Request, app: &App) -> ResultResp {
    let params = forms::read_form_body(req)
        .map_err(|e| ServerError::BadRequest(format!("Unreadable form body: {e}")))?;
    let form = PropertyForm::from_params(&params);

    let property = match form.clone().into_property(app.ids.next_id()) {
        Ok(p) => p,
        Err(msg) => {
            debug!(error = %msg, "admin form rejected");
            return admin_form(app, form, Some(msg), 400);
        }
    };
    let id = property.id.clone();

    match app.catalog.append(property) {
        Ok(()) => {
            info!(%id, "admin published property");
            redirect(&format!("/properties/{id}"))
        }
        Err(CatalogError::DuplicateId(dup)) => {
            warn!(id = %dup, "id collision on admin submit");
            admin_form(
                app,
                form,
                Some("This listing could not be saved because its reference is already taken. Please submit the form again.".to_string()),
                409,
            )
        }
    }
}
