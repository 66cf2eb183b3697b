/// The canonical view model every source is reduced to.
pub mod model;

/// US stock shares outstanding from the [SEC] XBRL `companyconcept` API.
///
/// [SEC]: https://www.sec.gov/search-filings/edgar-application-programming-interfaces
pub mod sec;

/// The bundled `data.json` snapshot.
pub mod snapshot;
