//! Hebrew strings

pub(super) const STRINGS: &[(&str, &str)] = &[
    ("common.loading", "טוען..."),
    ("common.error", "אירעה שגיאה"),
    ("common.save", "שמור"),
    ("common.cancel", "ביטול"),
    ("common.delete", "מחק"),
    ("common.edit", "ערוך"),
    ("common.view", "צפה"),
    ("common.search", "חיפוש"),
    ("common.noResults", "לא נמצאו תוצאות"),
    ("auth.signIn", "התחברות"),
    ("auth.signUp", "הרשמה"),
    ("auth.signOut", "התנתקות"),
    ("auth.email", "כתובת דואר אלקטרוני"),
    ("auth.password", "סיסמה"),
    ("auth.confirmPassword", "אימות סיסמה"),
    ("auth.forgotPassword", "שכחת סיסמה?"),
    ("auth.noAccount", "אין לך חשבון?"),
    ("auth.hasAccount", "כבר יש לך חשבון?"),
    ("navigation.dashboard", "לוח בקרה"),
    ("navigation.products", "מוצרים"),
    ("navigation.orders", "הזמנות"),
    ("navigation.users", "משתמשים"),
    ("navigation.contentAI", "תוכן AI"),
    ("navigation.analytics", "אנליטיקה"),
    ("dashboard.welcome", "ברוך הבא, {{name}}!"),
    ("dashboard.overview", "הנה סקירה מהירה של חנות הממתקים שלך."),
    ("dashboard.totalCandies", "סך הכל ממתקים"),
    ("dashboard.activePromotions", "מבצעים פעילים"),
    ("dashboard.usersOnline", "משתמשים מחוברים"),
    ("dashboard.siteSettings", "הגדרות אתר"),
    ("products.management", "ניהול מוצרים"),
    ("products.subtitle", "נהל את המלאי של הממתקים והחטיפים שלך."),
    ("products.addNew", "הוסף מוצר חדש"),
    ("products.name", "שם"),
    ("products.price", "מחיר"),
    ("products.inventory", "מלאי"),
    ("products.category", "קטגוריה"),
    ("products.description", "תיאור"),
    ("products.imageUrl", "כתובת תמונה"),
    ("products.stock", "מלאי: {{count}} יחידות"),
    ("orders.management", "ניהול הזמנות"),
    ("orders.subtitle", "צפה ונהל את כל ההזמנות הנכנסות מלקוחות."),
    ("orders.orderNumber", "הזמנה מס׳ {{number}}"),
    ("orders.status.pending", "ממתין"),
    ("orders.status.processing", "בטיפול"),
    ("orders.status.shipped", "נשלח"),
    ("orders.status.delivered", "נמסר"),
    ("orders.status.cancelled", "בוטל"),
    ("users.management", "ניהול משתמשים"),
    ("users.subtitle", "צפה ונהל בעלי חנויות ומנהלים רשומים."),
    ("users.addNew", "הוסף משתמש"),
    ("users.lastLogin", "התחברות אחרונה: {{date}}"),
    ("users.role.admin", "מנהל"),
    ("users.role.manager", "מנהל חנות"),
    ("users.role.staff", "צוות"),
    ("contentAI.title", "תוכן AI"),
    ("contentAI.subtitle", "יצירת תוכן שיווקי לחנות הממתקים שלך"),
    ("contentAI.generate", "צור"),
    ("contentAI.post", "פרסם עכשיו"),
    ("contentAI.schedule", "תזמן פרסום"),
    ("contentAI.templates", "תבניות מהירות"),
    ("contentAI.history", "היסטוריית תוכן"),
    ("contentAI.rating.useful", "שימושי"),
    ("contentAI.rating.notRelevant", "לא רלוונטי"),
    ("contentAI.rating.saveTemplate", "שמור כתבנית"),
    ("contentAI.rating.saved", "נשמר בתבניות"),
    ("contentAI.types.social", "חברתי"),
    ("contentAI.types.whatsapp", "וואטסאפ"),
    ("contentAI.types.email", "דואר אלקטרוני"),
    ("contentAI.culturalTemplates.holidays.title", "חגים"),
    ("contentAI.culturalTemplates.shabbat.title", "שבת"),
    ("analytics.title", "אנליטיקת מכירות"),
    ("analytics.subtitle", "עקוב אחר ביצועי מכירות ונתח מגמות."),
    ("analytics.export", "ייצוא"),
    ("analytics.timeRange", "טווח זמן"),
    ("analytics.metrics.revenue", "סך הכנסות"),
    ("analytics.metrics.orders", "סך הזמנות"),
    ("analytics.metrics.items", "פריטים שנמכרו"),
    ("analytics.metrics.customers", "לקוחות חדשים"),
];

pub(super) const LISTS: &[(&str, &[&str])] = &[
    (
        "contentAI.culturalTemplates.holidays.templates",
        &[
            "מבצעי סוף החודש - הנחה של 20% על כל הממתקים",
            "חבילות מתוקים לראש השנה - הזמינו עכשיו",
            "מארזי שי לפורים - משלוח מנות מתוק",
        ],
    ),
    (
        "contentAI.culturalTemplates.shabbat.templates",
        &[
            "מארזי ממתקים לשבת - הזמינו עד יום חמישי",
            "חבילות שי מתוקות לאירוח שבת",
            "מבחר שוקולדים כשרים למהדרין",
        ],
    ),
];
