mod footprint_margins_offset;
mod footprint_orientation;
