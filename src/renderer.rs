//! Dashboard renderer
//!
//! Turns a packet table into the four dashboard widgets: protocol
//! distribution, packets per second, average size per protocol and, when the
//! table has a `source` column, the top talkers.

use crate::aggregate::{mean_by_group, packets_per_second, top_n, value_counts};
use crate::consts::dashboard_consts::{
    DASHBOARD_HEADING, NO_DATA_NOTICE, SUCCESS_NOTICE, TIMESTAMP_FAILURE_PREFIX, average_size,
    packet_rate, protocol_distribution, top_talkers,
};
use crate::session::DashboardSession;
use crate::table::{PROTOCOL, PacketTable, SIZE, SOURCE, TableError};
use crate::widgets::{Bar, BarChart, LineChart, PieChart, TableView, Widget};
use log::{debug, info, warn};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// The table does not have the shape the widgets need.
    #[error("Malformed packet table: {0}")]
    Table(#[from] TableError),
}

/// Renders the dashboard for `table` into `session`.
///
/// The table is normalized in place: timestamps become date-times and rows
/// whose timestamp does not convert are dropped. An empty table or a failed
/// timestamp conversion is reported to the session and returns `Ok`; any other
/// malformed input is returned as an error, leaving whatever was already
/// emitted in the session.
pub fn render<S: DashboardSession + ?Sized>(
    table: &mut PacketTable,
    session: &mut S,
) -> Result<(), RenderError> {
    session.heading(DASHBOARD_HEADING);

    if table.is_empty() {
        debug!("Empty packet table, nothing to draw");
        session.warning(NO_DATA_NOTICE);
        return Ok(());
    }

    match table.normalize_timestamps() {
        Ok(0) => {}
        Ok(dropped) => info!("Ignoring {} rows without a valid timestamp", dropped),
        Err(e) => {
            warn!("{}: {}", TIMESTAMP_FAILURE_PREFIX, e);
            session.error(&format!("{}: {}", TIMESTAMP_FAILURE_PREFIX, e));
            return Ok(());
        }
    }

    session.subheader(protocol_distribution::SUBHEADER);
    session.widget(protocol_distribution_widget(table)?);

    session.subheader(packet_rate::SUBHEADER);
    session.widget(packet_rate_widget(table)?);

    session.subheader(average_size::SUBHEADER);
    session.widget(average_size_widget(table)?);

    if table.has_column(SOURCE) {
        session.subheader(top_talkers::SUBHEADER);
        session.widget(top_talkers_widget(table)?);
    }

    info!("Rendered dashboard for {} packets", table.len());
    session.success(SUCCESS_NOTICE);
    Ok(())
}

fn protocol_distribution_widget(table: &PacketTable) -> Result<Widget, TableError> {
    Ok(Widget::Pie(PieChart {
        title: protocol_distribution::TITLE.to_string(),
        slices: value_counts(table.labels(PROTOCOL)?),
    }))
}

fn packet_rate_widget(table: &PacketTable) -> Result<Widget, TableError> {
    Ok(Widget::Line(LineChart {
        title: packet_rate::TITLE.to_string(),
        y_title: packet_rate::Y_TITLE.to_string(),
        points: packets_per_second(&table.timestamps()?),
        smooth: true,
        markers: true,
    }))
}

fn average_size_widget(table: &PacketTable) -> Result<Widget, TableError> {
    let labels = table.labels(PROTOCOL)?;
    let sizes = table.numbers(SIZE)?;
    let bars = mean_by_group(&labels, &sizes)
        .into_iter()
        .map(|(label, value)| Bar {
            label,
            value,
            text: format!("{:.1} bytes", value),
        })
        .collect();
    Ok(Widget::Bar(BarChart {
        title: average_size::TITLE.to_string(),
        x_title: average_size::X_TITLE.to_string(),
        y_title: average_size::Y_TITLE.to_string(),
        bars,
    }))
}

fn top_talkers_widget(table: &PacketTable) -> Result<Widget, TableError> {
    Ok(Widget::Table(TableView {
        title: top_talkers::TITLE.to_string(),
        header: [
            top_talkers::ADDRESS_HEADER.to_string(),
            top_talkers::COUNT_HEADER.to_string(),
        ],
        rows: top_n(value_counts(table.labels(SOURCE)?), top_talkers::LIMIT),
    }))
}
