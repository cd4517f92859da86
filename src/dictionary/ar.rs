//! Arabic display strings.
//!
//! Key order mirrors `en.rs` exactly; keep the two files in sync when adding
//! entries.

/// Arabic translation table.
pub(super) static TABLE: &[(&str, &str)] = &[
    // ==================== Welcome Screen ====================
    ("welcome_title", "نظام الأمان الذكي"),
    ("welcome_subtitle", "مرحباً بك في منصة أبشر المتكاملة"),
    ("welcome_tagline", "للأمن المدني والعمليات الميدانية"),
    ("welcome_powered", "تطوير فريق"),
    ("choose_account", "اختر نوع الحساب"),
    ("choose_subtitle", "الرجاء تحديد نوع حسابك المناسب"),
    // ==================== Civilian Section ====================
    ("home_title", "أفراد"),
    ("home_description", "نظام الأمان المنزلي الذكي للأفراد والعائلات"),
    ("home_feature1", "مراقبة منزلك على مدار الساعة"),
    ("home_feature2", "تنبيهات فورية للأحداث الأمنية"),
    ("home_feature3", "إرسال بلاغات الشرطة"),
    ("home_feature4", "خرائط تفاعلية للأجهزة"),
    ("home_feature5", "تقارير المشكلات المتقدم"),
    ("home_login", "تحويل للأفراد"),
    // ==================== Field Security Section ====================
    ("military_title", "الأمن الميداني"),
    ("military_description", "نظام إدارة الدوريات والعمليات الأمنية الميدانية"),
    ("military_feature1", "متابعة الدوريات الأمنية"),
    ("military_feature2", "إدارة الحالات الطارئة"),
    ("military_feature3", "تتبع GPS للدوريات"),
    ("military_feature4", "تحليل أوقات الاستجابة"),
    ("military_feature5", "مركز العمليات الميداني"),
    ("military_login", "تحويل للعسكريين"),
    // ==================== Shared Buttons ====================
    ("events_dashboard", "تتبع الاستعدادات الموسمية"),
    // ==================== Civilian Dashboard ====================
    ("dashboard_title", "لوحة التحكم"),
    ("dashboard_welcome", "مرحباً بك"),
    ("dashboard_home_security", "أمان المنزل"),
    ("system_status", "حالة النظام"),
    ("all_systems", "جميع الأنظمة"),
    ("operational", "تعمل بشكل سليم"),
    ("devices", "الأجهزة"),
    ("active_devices", "جهاز نشط"),
    ("last_24h", "آخر 24 ساعة"),
    ("alerts", "التنبيهات"),
    ("pending_alerts", "تنبيه معلق"),
    ("requires_attention", "يتطلب الاهتمام"),
    ("events", "الأحداث"),
    ("recorded_events", "حدث مسجل"),
    ("this_week", "هذا الأسبوع"),
    // ==================== Devices ====================
    ("device_id", "رقم الجهاز"),
    ("device_type", "نوع الجهاز"),
    ("location", "الموقع"),
    ("status", "الحالة"),
    ("battery", "البطارية"),
    ("last_update", "آخر تحديث"),
    ("active", "نشط"),
    ("inactive", "غير نشط"),
    // ==================== Device Types ====================
    ("camera", "كاميرا"),
    ("door_sensor", "مستشعر باب"),
    ("motion_sensor", "مستشعر حركة"),
    ("smoke_detector", "كاشف دخان"),
    // ==================== Locations ====================
    ("main_entrance", "المدخل الرئيسي"),
    ("living_room", "غرفة المعيشة"),
    ("backyard", "الفناء الخلفي"),
    ("kitchen", "المطبخ"),
    ("garage", "الجراج"),
    ("bedroom", "غرفة النوم"),
    // ==================== Recent Events ====================
    ("recent_events", "الأحداث الأخيرة"),
    ("event_time", "الوقت"),
    ("event_device", "الجهاز"),
    ("event_type", "نوع الحدث"),
    ("event_description", "الوصف"),
    ("motion_detected", "تم اكتشاف حركة"),
    ("door_opened", "تم فتح الباب"),
    ("camera_activated", "تم تفعيل الكاميرا"),
    ("smoke_alarm", "إنذار دخان"),
    // ==================== Alerts ====================
    ("alert_pending", "معلق"),
    ("alert_resolved", "تم الحل"),
    ("high_priority", "أولوية عالية"),
    ("medium_priority", "أولوية متوسطة"),
    ("low_priority", "أولوية منخفضة"),
    // ==================== Actions ====================
    ("view_details", "عرض التفاصيل"),
    ("mark_resolved", "وضع علامة كمحلول"),
    ("delete", "حذف"),
    ("export_data", "تصدير البيانات"),
    ("import_data", "استيراد البيانات"),
    ("generate_report", "إنشاء تقرير"),
    // ==================== Operations Center ====================
    ("operations_center", "مركز العمليات الميدانية"),
    ("operations_welcome", "مرحباً بك في"),
    ("field_security", "الأمن الميداني"),
    ("patrol_tracking", "تتبع الدوريات"),
    ("officers_on_duty", "ضابط في الخدمة"),
    ("active_patrols", "دورية نشطة"),
    ("avg_response", "متوسط الاستجابة"),
    ("response_time", "دقيقة"),
    ("incidents_today", "حادث اليوم"),
    ("total_incidents", "إجمالي الحوادث"),
    // ==================== Patrol Officers ====================
    ("patrol_officers", "ضباط الدورية"),
    ("officer_id", "رقم الضابط"),
    ("officer_name", "اسم الضابط"),
    ("officer_status", "الحالة"),
    ("officer_location", "الموقع"),
    ("last_reported", "آخر بلاغ"),
    ("on_patrol", "في دورية"),
    ("available", "متاح"),
    ("off_duty", "خارج الخدمة"),
    // ==================== Incidents ====================
    ("recent_incidents", "الحوادث الأخيرة"),
    ("incident_id", "رقم الحادث"),
    ("incident_type", "نوع الحادث"),
    ("incident_priority", "الأولوية"),
    ("incident_status", "الحالة"),
    ("incident_officer", "الضابط المكلف"),
    ("incident_time", "الوقت"),
    // ==================== Incident Types ====================
    ("theft", "سرقة"),
    ("vandalism", "تخريب"),
    ("suspicious_activity", "نشاط مشبوه"),
    ("traffic_violation", "مخالفة مرورية"),
    ("emergency", "طارئ"),
    // ==================== Login Screen ====================
    ("login_title", "تسجيل الدخول"),
    ("login_subtitle", "مركز العمليات الميدانية"),
    ("username", "اسم المستخدم"),
    ("password", "كلمة المرور"),
    ("login_button", "تسجيل الدخول"),
    ("back_to_home", "العودة للرئيسية"),
    // ==================== General Buttons ====================
    ("logout", "تسجيل الخروج"),
    ("refresh", "تحديث"),
    ("settings", "الإعدادات"),
    ("help", "مساعدة"),
    ("about", "عن النظام"),
    // ==================== Messages ====================
    ("loading", "جاري التحميل..."),
    ("no_data", "لا توجد بيانات"),
    ("error", "خطأ في تحميل البيانات"),
    ("success", "تمت العملية بنجاح"),
    ("confirm_delete", "هل أنت متأكد من الحذف؟"),
    // ==================== Weekdays ====================
    ("monday", "الإثنين"),
    ("tuesday", "الثلاثاء"),
    ("wednesday", "الأربعاء"),
    ("thursday", "الخميس"),
    ("friday", "الجمعة"),
    ("saturday", "السبت"),
    ("sunday", "الأحد"),
    // ==================== Relative Dates ====================
    ("today", "اليوم"),
    ("yesterday", "أمس"),
    ("this_month", "هذا الشهر"),
    // ==================== Units ====================
    ("minutes", "دقائق"),
    ("hours", "ساعات"),
    ("days", "أيام"),
    ("meters", "متر"),
    ("kilometers", "كيلومتر"),
];
