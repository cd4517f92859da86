//! English display strings.
//!
//! Key order mirrors `ar.rs` exactly; keep the two files in sync when adding
//! entries.

/// English translation table.
pub(super) static TABLE: &[(&str, &str)] = &[
    // ==================== Welcome Screen ====================
    ("welcome_title", "Smart Security System"),
    ("welcome_subtitle", "Welcome to Absher Integrated Platform"),
    ("welcome_tagline", "For Civil Security and Field Operations"),
    ("welcome_powered", "Powered by"),
    ("choose_account", "Choose Account Type"),
    ("choose_subtitle", "Please select your appropriate account type"),
    // ==================== Civilian Section ====================
    ("home_title", "Civilians"),
    ("home_description", "Smart Home Security System for Individuals and Families"),
    ("home_feature1", "Monitor your home 24/7"),
    ("home_feature2", "Instant alerts for security events"),
    ("home_feature3", "Police report submission"),
    ("home_feature4", "Interactive device maps"),
    ("home_feature5", "Advanced incident reports"),
    ("home_login", "Civilian Access"),
    // ==================== Field Security Section ====================
    ("military_title", "Field Security"),
    ("military_description", "Patrol Management and Field Security Operations System"),
    ("military_feature1", "Security patrol monitoring"),
    ("military_feature2", "Emergency incident management"),
    ("military_feature3", "GPS patrol tracking"),
    ("military_feature4", "Response time analysis"),
    ("military_feature5", "Field operations center"),
    ("military_login", "Military Access"),
    // ==================== Shared Buttons ====================
    ("events_dashboard", "Track Seasonal Preparations"),
    // ==================== Civilian Dashboard ====================
    ("dashboard_title", "Dashboard"),
    ("dashboard_welcome", "Welcome"),
    ("dashboard_home_security", "Home Security"),
    ("system_status", "System Status"),
    ("all_systems", "All Systems"),
    ("operational", "Operational"),
    ("devices", "Devices"),
    ("active_devices", "Active Devices"),
    ("last_24h", "Last 24 Hours"),
    ("alerts", "Alerts"),
    ("pending_alerts", "Pending Alerts"),
    ("requires_attention", "Requires Attention"),
    ("events", "Events"),
    ("recorded_events", "Recorded Events"),
    ("this_week", "This Week"),
    // ==================== Devices ====================
    ("device_id", "Device ID"),
    ("device_type", "Type"),
    ("location", "Location"),
    ("status", "Status"),
    ("battery", "Battery"),
    ("last_update", "Last Update"),
    ("active", "Active"),
    ("inactive", "Inactive"),
    // ==================== Device Types ====================
    ("camera", "Camera"),
    ("door_sensor", "Door Sensor"),
    ("motion_sensor", "Motion Sensor"),
    ("smoke_detector", "Smoke Detector"),
    // ==================== Locations ====================
    ("main_entrance", "Main Entrance"),
    ("living_room", "Living Room"),
    ("backyard", "Backyard"),
    ("kitchen", "Kitchen"),
    ("garage", "Garage"),
    ("bedroom", "Bedroom"),
    // ==================== Recent Events ====================
    ("recent_events", "Recent Events"),
    ("event_time", "Time"),
    ("event_device", "Device"),
    ("event_type", "Event Type"),
    ("event_description", "Description"),
    ("motion_detected", "Motion Detected"),
    ("door_opened", "Door Opened"),
    ("camera_activated", "Camera Activated"),
    ("smoke_alarm", "Smoke Alarm"),
    // ==================== Alerts ====================
    ("alert_pending", "Pending"),
    ("alert_resolved", "Resolved"),
    ("high_priority", "High Priority"),
    ("medium_priority", "Medium Priority"),
    ("low_priority", "Low Priority"),
    // ==================== Actions ====================
    ("view_details", "View Details"),
    ("mark_resolved", "Mark as Resolved"),
    ("delete", "Delete"),
    ("export_data", "Export Data"),
    ("import_data", "Import Data"),
    ("generate_report", "Generate Report"),
    // ==================== Operations Center ====================
    ("operations_center", "Field Operations Center"),
    ("operations_welcome", "Welcome to"),
    ("field_security", "Field Security"),
    ("patrol_tracking", "Patrol Tracking"),
    ("officers_on_duty", "Officers on Duty"),
    ("active_patrols", "Active Patrols"),
    ("avg_response", "Avg Response"),
    ("response_time", "Minutes"),
    ("incidents_today", "Incidents Today"),
    ("total_incidents", "Total Incidents"),
    // ==================== Patrol Officers ====================
    ("patrol_officers", "Patrol Officers"),
    ("officer_id", "Officer ID"),
    ("officer_name", "Name"),
    ("officer_status", "Status"),
    ("officer_location", "Location"),
    ("last_reported", "Last Reported"),
    ("on_patrol", "On Patrol"),
    ("available", "Available"),
    ("off_duty", "Off Duty"),
    // ==================== Incidents ====================
    ("recent_incidents", "Recent Incidents"),
    ("incident_id", "Incident ID"),
    ("incident_type", "Type"),
    ("incident_priority", "Priority"),
    ("incident_status", "Status"),
    ("incident_officer", "Assigned Officer"),
    ("incident_time", "Time"),
    // ==================== Incident Types ====================
    ("theft", "Theft"),
    ("vandalism", "Vandalism"),
    ("suspicious_activity", "Suspicious Activity"),
    ("traffic_violation", "Traffic Violation"),
    ("emergency", "Emergency"),
    // ==================== Login Screen ====================
    ("login_title", "Login"),
    ("login_subtitle", "Field Operations Center"),
    ("username", "Username"),
    ("password", "Password"),
    ("login_button", "Login"),
    ("back_to_home", "Back to Home"),
    // ==================== General Buttons ====================
    ("logout", "Logout"),
    ("refresh", "Refresh"),
    ("settings", "Settings"),
    ("help", "Help"),
    ("about", "About"),
    // ==================== Messages ====================
    ("loading", "Loading..."),
    ("no_data", "No data available"),
    ("error", "Error loading data"),
    ("success", "Operation completed successfully"),
    ("confirm_delete", "Are you sure you want to delete?"),
    // ==================== Weekdays ====================
    ("monday", "Monday"),
    ("tuesday", "Tuesday"),
    ("wednesday", "Wednesday"),
    ("thursday", "Thursday"),
    ("friday", "Friday"),
    ("saturday", "Saturday"),
    ("sunday", "Sunday"),
    // ==================== Relative Dates ====================
    ("today", "Today"),
    ("yesterday", "Yesterday"),
    ("this_month", "This Month"),
    // ==================== Units ====================
    ("minutes", "Minutes"),
    ("hours", "Hours"),
    ("days", "Days"),
    ("meters", "Meters"),
    ("kilometers", "Kilometers"),
];
