use plotters::element::Pie;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::chart::{hex_to_rgb, palette_color, BAR_COLOR};
use shared::money::format_money;
use shared::{BarPoint, ChartSeries, PieSlice, Summary};
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::services::logging::Logger;

const COMPONENT: &str = "summary-chart";
const PIE_RADIUS: f64 = 80.0;

#[derive(Properties, PartialEq)]
pub struct SummaryChartProps {
    pub summary: Summary,
    pub loading: bool,
    pub currency_symbol: String,
}

/// Legend row for one pie slice; `tooltip` is the money-formatted value.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub name: String,
    pub color: &'static str,
    pub tooltip: String,
}

pub fn legend_entries(slices: &[PieSlice], currency_symbol: &str) -> Vec<LegendEntry> {
    slices
        .iter()
        .enumerate()
        .map(|(index, slice)| LegendEntry {
            name: slice.name.clone(),
            color: palette_color(index),
            tooltip: format!("{}: {}", slice.name, format_money(slice.value, currency_symbol)),
        })
        .collect()
}

fn rgb(hex: &str) -> RGBColor {
    let (r, g, b) = hex_to_rgb(hex).unwrap_or((0, 0, 0));
    RGBColor(r, g, b)
}

/// Pie of the proportion series. Slices with non-positive values are drawn
/// as empty so the palette index still matches the legend.
fn draw_pie(canvas: HtmlCanvasElement, slices: &[PieSlice]) -> Result<(), String> {
    let backend = CanvasBackend::with_canvas_object(canvas)
        .ok_or_else(|| "canvas backend unavailable".to_string())?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE).map_err(|e| e.to_string())?;

    let sizes: Vec<f64> = slices.iter().map(|slice| slice.value.max(0.0)).collect();
    if sizes.iter().sum::<f64>() <= 0.0 {
        return root.present().map_err(|e| e.to_string());
    }

    let colors: Vec<RGBColor> = (0..slices.len()).map(|i| rgb(palette_color(i))).collect();
    let labels: Vec<&str> = slices.iter().map(|slice| slice.name.as_str()).collect();
    let (width, height) = root.dim_in_pixel();
    let center = (width as i32 / 2, height as i32 / 2);
    let radius = PIE_RADIUS;

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.label_style(("sans-serif", 12).into_font().color(&BLACK));
    root.draw(&pie).map_err(|e| e.to_string())?;
    root.present().map_err(|e| e.to_string())
}

/// Bar chart of the magnitude series with a money-formatted value axis.
fn draw_bars(canvas: HtmlCanvasElement, series: &ChartSeries, currency_symbol: &str) -> Result<(), String> {
    let backend = CanvasBackend::with_canvas_object(canvas)
        .ok_or_else(|| "canvas backend unavailable".to_string())?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE).map_err(|e| e.to_string())?;

    let points: &[BarPoint] = &series.magnitudes;
    let max_total = series.max_total();
    let y_max = if max_total > 0.0 { max_total * 1.1 } else { 1.0 };
    let names: Vec<String> = points.iter().map(|point| point.category.clone()).collect();

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d((0u32..points.len() as u32).into_segmented(), 0.0..y_max)
        .map_err(|e| e.to_string())?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(points.len().max(1))
        .x_label_formatter(&|value| match value {
            SegmentValue::CenterOf(index) | SegmentValue::Exact(index) => {
                names.get(*index as usize).cloned().unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        })
        .y_label_formatter(&|value| format_money(*value, currency_symbol))
        .label_style(("sans-serif", 12))
        .bold_line_style(RGBColor(235, 235, 235))
        .light_line_style(RGBColor(248, 248, 248))
        .draw()
        .map_err(|e| e.to_string())?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(rgb(BAR_COLOR).filled())
                .margin(12)
                .data(points.iter().enumerate().map(|(index, point)| (index as u32, point.total))),
        )
        .map_err(|e| e.to_string())?;

    root.present().map_err(|e| e.to_string())
}

pub struct SummaryChart {
    pie_ref: NodeRef,
    bar_ref: NodeRef,
}

impl SummaryChart {
    fn draw(&self, props: &SummaryChartProps) {
        if props.loading {
            return;
        }
        let series = ChartSeries::from_summary(&props.summary);
        if series.is_empty() {
            return;
        }

        if let Some(canvas) = self.pie_ref.cast::<HtmlCanvasElement>() {
            if let Err(e) = draw_pie(canvas, &series.proportions) {
                Logger::warn_with_component(COMPONENT, &format!("pie chart not drawn: {}", e));
            }
        }
        if let Some(canvas) = self.bar_ref.cast::<HtmlCanvasElement>() {
            if let Err(e) = draw_bars(canvas, &series, &props.currency_symbol) {
                Logger::warn_with_component(COMPONENT, &format!("bar chart not drawn: {}", e));
            }
        }
    }
}

impl Component for SummaryChart {
    type Message = ();
    type Properties = SummaryChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            pie_ref: NodeRef::default(),
            bar_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        ctx.props() != old_props
    }

    // Series are re-derived from the summary on every render
    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        self.draw(ctx.props());
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        if props.loading {
            return html! {
                <div class="card chart-card">
                    <p class="chart-loading">{"Loading charts..."}</p>
                </div>
            };
        }

        let series = ChartSeries::from_summary(&props.summary);
        let legend = legend_entries(&series.proportions, &props.currency_symbol);

        html! {
            <div class="card chart-card">
                <h3>{"Summary"}</h3>

                {if series.is_empty() {
                    html! { <p class="chart-empty">{"No categories yet."}</p> }
                } else {
                    html! {
                        <div class="chart-row">
                            <div class="chart-cell">
                                <canvas ref={self.pie_ref.clone()} class="pie-chart" width="300" height="260"></canvas>
                                <ul class="chart-legend">
                                    {for legend.iter().map(|entry| html! {
                                        <li key={entry.name.clone()} title={entry.tooltip.clone()}>
                                            <span class="legend-swatch" style={format!("background: {};", entry.color)}></span>
                                            {&entry.name}
                                        </li>
                                    })}
                                </ul>
                            </div>
                            <div class="chart-cell">
                                <canvas ref={self.bar_ref.clone()} class="bar-chart" width="360" height="260"></canvas>
                                <ul class="chart-values">
                                    {for series.magnitudes.iter().map(|point| html! {
                                        <li key={point.category.clone()} title={format_money(point.total, &props.currency_symbol)}>
                                            {&point.category}
                                        </li>
                                    })}
                                </ul>
                            </div>
                        </div>
                    }
                }}

                <p class="chart-footer">
                    <strong>{"Total: "}</strong>
                    <span class="total-value">{format_money(props.summary.total, &props.currency_symbol)}</span>
                    {" • "}
                    <strong>{"Entries: "}</strong>
                    {props.summary.count}
                </p>
            </div>
        }
    }
}
